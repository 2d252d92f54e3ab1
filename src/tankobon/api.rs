//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry point
//! for every tankobon operation, whatever the UI.
//!
//! It dispatches to `commands/*.rs` and returns structured types
//! (`Result<CmdResult>`). It does no printing and holds no business logic.
//!
//! ## Generic Over DirStore
//!
//! `TankobonApi<S: DirStore>` is generic over the storage backend:
//! - Production: `TankobonApi<FsStore>`
//! - Testing: `TankobonApi<InMemoryStore>`

use crate::commands;
use crate::config::{Options, WorkMode};
use crate::error::Result;
use crate::store::DirStore;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Plan};

pub struct TankobonApi<S: DirStore> {
    store: S,
}

impl<S: DirStore> TankobonApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the series and compute the new names.
    pub fn plan(&self, opts: &Options) -> Result<Plan> {
        commands::plan::run(&self.store, opts)
    }

    pub fn report(&self, opts: &Options) -> Result<CmdResult> {
        let plan = self.plan(opts)?;
        Ok(commands::report::run(&plan))
    }

    pub fn dry_run(&mut self, opts: &Options) -> Result<CmdResult> {
        let plan = self.plan(opts)?;
        commands::apply::run(&mut self.store, &plan, true)
    }

    pub fn apply(&mut self, opts: &Options) -> Result<CmdResult> {
        let plan = self.plan(opts)?;
        commands::apply::run(&mut self.store, &plan, false)
    }

    /// Run the action selected in `opts`.
    pub fn run(&mut self, opts: &Options) -> Result<CmdResult> {
        match opts.action {
            WorkMode::Report => self.report(opts),
            WorkMode::DryRun => self.dry_run(opts),
            WorkMode::Enable => self.apply(opts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TankobonError;
    use crate::store::memory::InMemoryStore;
    use crate::transform::MoveStatus;

    fn api() -> TankobonApi<InMemoryStore> {
        TankobonApi::new(InMemoryStore::new().with_dirs(&[
            "/lib/S/S v01/S v01 c01",
            "/lib/S/S v02/S v02 c02",
        ]))
    }

    #[test]
    fn test_run_report() {
        let mut api = api();
        let result = api.run(&Options::new("Series", "/lib/S")).unwrap();
        assert_eq!(result.report.len(), 5);
        assert!(result.moves.is_empty());
        assert!(api.store().moves().is_empty());
    }

    #[test]
    fn test_run_dry_run() {
        let mut api = api();
        let mut opts = Options::new("Series", "/lib/S");
        opts.action = WorkMode::DryRun;
        let result = api.run(&opts).unwrap();
        assert!(result.report.is_empty());
        assert_eq!(result.moves.len(), 4);
        assert!(result.moves.iter().all(|m| m.status == MoveStatus::Planned));
        assert!(api.store().moves().is_empty());
    }

    #[test]
    fn test_run_enable() {
        let mut api = api();
        let mut opts = Options::new("Series", "/lib/S");
        opts.action = WorkMode::Enable;
        let result = api.run(&opts).unwrap();
        assert_eq!(result.moves.len(), 4);
        assert_eq!(api.store().moves().len(), 4);
        assert!(api.store().exists("/lib/S/Series vol 02/Series v02 c02"));
    }

    #[test]
    fn test_errors_propagate() {
        let mut api = TankobonApi::new(
            InMemoryStore::new().with_dirs(&["/lib/A/A v01/A v01 c01 c02", "/lib/A/A v01/x"]),
        );
        let result = api.run(&Options::new("A", "/lib/A"));
        assert!(matches!(result, Err(TankobonError::CannotChoose(_))));
    }
}
