// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Network derivation: find the VPC a job ran in, strictly best-effort.
//!
//! The VPC id cascade is fixed: resolved instance, then the attempt's
//! network interface, then the compute environment's first subnet. One
//! describe call enriches the id with name, CIDRs, state, and tags.
//! Nothing here ever errors observably; an unresolved VPC is just an
//! absent field.

use jt_adapters::ComputeApi;
use jt_core::{ComputeEnvironmentDetail, Diagnostics, InstanceDetail, VpcDetail};

/// Derive and enrich the owning VPC from whatever is available.
pub async fn derive_vpc(
    compute: &dyn ComputeApi,
    instance: Option<&InstanceDetail>,
    eni_reference: Option<&str>,
    compute_env: Option<&ComputeEnvironmentDetail>,
    diag: &Diagnostics,
) -> Option<VpcDetail> {
    let vpc_id = vpc_id_cascade(compute, instance, eni_reference, compute_env, diag).await?;

    match compute.describe_vpc(&vpc_id).await {
        Ok(found) => found,
        Err(e) => {
            diag.note("vpc", format!("vpc describe failed: {e}"));
            None
        }
    }
}

/// First source that yields a VPC id wins.
async fn vpc_id_cascade(
    compute: &dyn ComputeApi,
    instance: Option<&InstanceDetail>,
    eni_reference: Option<&str>,
    compute_env: Option<&ComputeEnvironmentDetail>,
    diag: &Diagnostics,
) -> Option<String> {
    if let Some(vpc_id) = instance.and_then(|i| i.vpc_id.clone()) {
        return Some(vpc_id);
    }

    if let Some(eni_ref) = eni_reference {
        match compute.describe_network_interface(eni_ref).await {
            Ok(Some(eni)) => {
                if let Some(vpc_id) = eni.vpc_id {
                    return Some(vpc_id);
                }
            }
            Ok(None) => {}
            Err(e) => diag.note("vpc", format!("network-interface describe failed: {e}")),
        }
    }

    let subnet_id = compute_env.and_then(|ce| ce.subnets.first())?;
    match compute.describe_subnet(subnet_id).await {
        Ok(Some(subnet)) => subnet.vpc_id,
        Ok(None) => None,
        Err(e) => {
            diag.note("vpc", format!("subnet describe failed: {e}"));
            None
        }
    }
}

#[cfg(test)]
#[path = "network_tests.rs"]
mod tests;
