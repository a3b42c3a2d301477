// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sectioned text rendering for a resolved job chain.

use std::fmt::Write as _;

use jt_core::{format_elapsed, JobChain};

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

/// Format a timestamp as relative time (e.g., "5s", "2m", "1h", "3d")
pub fn format_time_ago(epoch_ms: i64) -> String {
    if epoch_ms <= 0 {
        return "-".to_string();
    }
    let now_ms = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64;
    let elapsed_secs = now_ms.saturating_sub(epoch_ms).max(0) / 1000;
    format!("{} ago", format_elapsed(elapsed_secs as u64))
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", color::header(title));
}

fn field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {:<18} {}", format!("{label}:"), value);
}

fn opt_field(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        field(out, label, value);
    }
}

fn absent(out: &mut String, message: &str) {
    let _ = writeln!(out, "  {}", color::muted(message));
}

/// Render the whole chain as sectioned text.
pub fn render_chain(chain: &JobChain) -> String {
    let mut out = String::new();

    section(&mut out, "Job");
    field(&mut out, "Id", &chain.job.id);
    field(&mut out, "Name", &chain.job.name);
    field(&mut out, "Status", &chain.job.status.to_string());
    opt_field(&mut out, "Status reason", chain.job.status_reason.as_deref());
    opt_field(&mut out, "Queue", chain.job.queue.as_deref());
    if !chain.job.platform.is_empty() {
        let platforms: Vec<String> =
            chain.job.platform.iter().map(|p| p.to_string()).collect();
        field(&mut out, "Platform", &platforms.join(", "));
    }
    if let Some(created) = chain.job.created_at_ms {
        field(&mut out, "Created", &format_time_ago(created));
    }
    if let Some(started) = chain.job.started_at_ms {
        field(&mut out, "Started", &format_time_ago(started));
    }
    if let Some(stopped) = chain.job.stopped_at_ms {
        field(&mut out, "Stopped", &format_time_ago(stopped));
    }
    field(&mut out, "Attempts", &chain.job.attempts.len().to_string());

    if let Some(spec) = &chain.job.container {
        section(&mut out, "Container (declared)");
        opt_field(&mut out, "Image", spec.image.as_deref());
        if !spec.command.is_empty() {
            field(&mut out, "Command", &spec.command.join(" "));
        }
        opt_field(&mut out, "vCPUs", spec.vcpus.as_deref());
        opt_field(&mut out, "Memory (MiB)", spec.memory_mb.as_deref());
        opt_field(&mut out, "Job role", spec.job_role_arn.as_deref());
    }

    if let Some(container) = &chain.container {
        section(&mut out, "Container (runtime)");
        if let Some(exit_code) = container.exit_code {
            field(&mut out, "Exit code", &exit_code.to_string());
        }
        opt_field(&mut out, "Reason", container.reason.as_deref());
        opt_field(&mut out, "Log stream", container.log_stream_name.as_deref());
    }

    section(&mut out, "ECS task");
    match &chain.task {
        Some(task) => {
            field(&mut out, "Task", &task.arn);
            opt_field(&mut out, "Cluster", task.cluster_arn.as_deref());
            field(&mut out, "Launch type", &task.launch_type.to_string());
            opt_field(&mut out, "Status", task.status.as_deref());
        }
        None => absent(&mut out, "no ECS task resolved"),
    }

    section(&mut out, "EC2 instance");
    match &chain.instance {
        Some(instance) => {
            field(&mut out, "Instance", &instance.id);
            opt_field(&mut out, "Type", instance.instance_type.as_deref());
            opt_field(&mut out, "State", instance.state.as_deref());
            opt_field(&mut out, "Private IP", instance.private_ip.as_deref());
            opt_field(&mut out, "Public IP", instance.public_ip.as_deref());
            opt_field(&mut out, "Subnet", instance.subnet_id.as_deref());
            opt_field(&mut out, "AZ", instance.availability_zone.as_deref());
            if !instance.security_groups.is_empty() {
                let groups: Vec<&str> = instance
                    .security_groups
                    .iter()
                    .filter_map(|g| g.id.as_deref().or(g.name.as_deref()))
                    .collect();
                field(&mut out, "Security groups", &groups.join(", "));
            }
        }
        None => absent(&mut out, "no EC2 instance found"),
    }

    section(&mut out, "Compute environment");
    match &chain.compute_environment {
        Some(env) => {
            field(&mut out, "Environment", env.name.as_deref().unwrap_or(&env.arn));
            opt_field(&mut out, "Type", env.env_type.as_deref());
            opt_field(&mut out, "State", env.state.as_deref());
            opt_field(&mut out, "ECS cluster", env.cluster_arn.as_deref());
            if !env.instance_types.is_empty() {
                field(&mut out, "Instance types", &env.instance_types.join(", "));
            }
            opt_field(&mut out, "Allocation", env.allocation_strategy.as_deref());
        }
        None => absent(&mut out, "no compute environment resolved"),
    }

    section(&mut out, "VPC");
    match &chain.vpc {
        Some(vpc) => {
            field(&mut out, "Vpc", &vpc.id);
            opt_field(&mut out, "Name", vpc.name.as_deref());
            opt_field(&mut out, "CIDR", vpc.cidr_block.as_deref());
            opt_field(&mut out, "IPv6 CIDR", vpc.ipv6_cidr_block.as_deref());
            opt_field(&mut out, "State", vpc.state.as_deref());
        }
        None => absent(&mut out, "no VPC details available"),
    }

    section(&mut out, "Logs");
    if chain.log_lines.is_empty() {
        absent(&mut out, "no logs available");
    } else {
        for line in &chain.log_lines {
            let _ = writeln!(out, "  {line}");
        }
    }

    out
}

pub fn print_chain(chain: &JobChain) {
    print!("{}", render_chain(chain));
}
