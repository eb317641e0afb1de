//! Priority-ordered merging of requirements across a project and its kits.

use std::cmp::Reverse;
use std::fmt;

use crate::catalog::Requirement;

use super::resolved::ResolvedKit;

/// Where a merged requirement came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementSource<'a> {
    /// One of the project's own requirements.
    Project,
    /// A requirement of the kit published under this key.
    Kit(&'a str),
}

impl fmt::Display for RequirementSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project => f.write_str("project"),
            Self::Kit(key) => f.write_str(key),
        }
    }
}

/// A requirement tagged with its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedRequirement<'a> {
    pub source: RequirementSource<'a>,
    pub requirement: &'a Requirement,
}

/// Merge requirements, highest effective priority first.
///
/// Input order is project requirements, then each kit's in resolution
/// order. The sort is stable, so equal priorities keep that order.
pub fn merge_requirements<'a>(
    own: &'a [Requirement],
    kits: &'a [ResolvedKit],
) -> Vec<MergedRequirement<'a>> {
    let mut merged: Vec<MergedRequirement<'a>> = own
        .iter()
        .map(|requirement| MergedRequirement {
            source: RequirementSource::Project,
            requirement,
        })
        .chain(kits.iter().flat_map(|resolved| {
            resolved
                .kit
                .requirements
                .iter()
                .map(move |requirement| MergedRequirement {
                    source: RequirementSource::Kit(&resolved.key),
                    requirement,
                })
        }))
        .collect();

    merged.sort_by_key(|m| Reverse(m.requirement.effective_priority()));
    merged
}
