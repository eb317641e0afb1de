//! Transitive kit resolution.
//!
//! Walks a project's direct references depth-first through a locked
//! registry view. Kits are recorded in first-discovery (pre-)order; a kit
//! reached again after it was fully visited is skipped, a kit reached while
//! it is still on the current path is a cycle.

use std::collections::HashMap;

use crate::catalog::{Kit, KitRef, Project};
use crate::error::{Result, TofukitError};
use crate::registry::RegistryView;

use super::resolved::ResolvedKit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Visiting,
    Visited,
}

struct ClosureWalker<'v, 'r> {
    view: &'v RegistryView<'r>,
    state: HashMap<String, VisitState>,
    path: Vec<String>,
    resolved: Vec<ResolvedKit>,
}

impl<'v, 'r> ClosureWalker<'v, 'r> {
    fn new(view: &'v RegistryView<'r>) -> Self {
        Self {
            view,
            state: HashMap::new(),
            path: Vec::new(),
            resolved: Vec::new(),
        }
    }

    /// Walk everything reachable from `root`.
    ///
    /// Iterative: each stack frame is a kit on the current path and the
    /// index of its next dependency to visit.
    fn visit(&mut self, root: &KitRef, required_by: &str) -> Result<()> {
        let Some(kit) = self.enter(root, required_by)? else {
            return Ok(());
        };
        let mut stack: Vec<(&'v Kit, usize)> = vec![(kit, 0)];

        while let Some(frame) = stack.last_mut() {
            let (kit, next) = *frame;
            match kit.depends_on.get(next) {
                Some(dependency) => {
                    frame.1 += 1;
                    if let Some(child) = self.enter(dependency, &kit.id)? {
                        stack.push((child, 0));
                    }
                }
                None => {
                    stack.pop();
                    self.path.pop();
                    self.state.insert(kit.id.clone(), VisitState::Visited);
                }
            }
        }
        Ok(())
    }

    /// Start visiting a referenced kit. `None` when it was already visited.
    fn enter(&mut self, reference: &KitRef, required_by: &str) -> Result<Option<&'v Kit>> {
        let id = reference.id();

        match self.state.get(&id) {
            Some(VisitState::Visited) => return Ok(None),
            Some(VisitState::Visiting) => {
                let start = self.path.iter().position(|p| *p == id).unwrap_or(0);
                let mut cycle = self.path[start..].to_vec();
                cycle.push(id);
                return Err(TofukitError::DependencyCycle {
                    path: cycle.join(" -> "),
                });
            }
            None => {}
        }

        let view = self.view;
        let kit = view.get(&id).ok_or_else(|| TofukitError::NotFound {
            reference: reference.to_string(),
            required_by: required_by.to_string(),
        })?;

        self.state.insert(id.clone(), VisitState::Visiting);
        self.path.push(id.clone());
        self.resolved.push(ResolvedKit::new(id, kit.clone()));
        Ok(Some(kit))
    }
}

/// Resolve every kit reachable from the project's direct references.
///
/// Keys are kit IDs. The whole walk reads from the single `view`, so a
/// concurrent registry write can never be observed halfway.
pub(crate) fn resolve_closure(view: &RegistryView<'_>, project: &Project) -> Result<Vec<ResolvedKit>> {
    let mut walker = ClosureWalker::new(view);
    for reference in &project.depends_on {
        walker.visit(reference, &project.id)?;
    }
    Ok(walker.resolved)
}
