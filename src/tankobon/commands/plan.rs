use crate::config::Options;
use crate::error::Result;
use crate::store::DirStore;
use crate::transform::Transform;
use crate::tree::{validate_template, Series};
use std::path::Path;
use tracing::debug;

/// A series as read from disk, and the renames that would normalize it.
#[derive(Debug, Clone)]
pub struct Plan {
    pub series: Series,
    pub transform: Transform,
}

impl Plan {
    /// Directory holding the top entry of the transform.
    pub fn base(&self) -> &Path {
        self.series.origin()
    }
}

pub fn run<S: DirStore>(store: &S, opts: &Options) -> Result<Plan> {
    validate_template(&opts.volume.template)?;
    validate_template(&opts.chapter.template)?;

    let series = Series::build(opts, store)?;
    let transform = series.transform()?;
    debug!(
        "Planned {} with {} volume(s)",
        transform.old(),
        series.volumes().len()
    );
    Ok(Plan { series, transform })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TankobonError;
    use crate::store::memory::InMemoryStore;

    fn names(t: &Transform) -> Vec<(String, Option<String>)> {
        t.children()
            .iter()
            .map(|c| (c.old().to_string(), c.new_name().map(str::to_string)))
            .collect()
    }

    #[test]
    fn test_plan_multi() {
        let store = InMemoryStore::new().with_dirs(&[
            "/lib/nominal/Nom v01/Nom v01 c01",
            "/lib/nominal/Nom v01/Nom v01 c02",
            "/lib/nominal/Nom v02/Nom v02 c03",
        ]);
        let plan = run(&store, &Options::new("Normal Series", "/lib/nominal")).unwrap();

        assert_eq!(plan.base(), Path::new("/lib"));
        assert_eq!(plan.transform.old(), "nominal");
        assert_eq!(plan.transform.new_name(), None);
        assert_eq!(
            names(&plan.transform),
            vec![
                ("Nom v01".to_string(), Some("Normal Series vol 01".to_string())),
                ("Nom v02".to_string(), Some("Normal Series vol 02".to_string())),
            ]
        );
        assert_eq!(
            names(&plan.transform.children()[1]),
            vec![(
                "Nom v02 c03".to_string(),
                Some("Normal Series v02 c03".to_string())
            )]
        );
    }

    #[test]
    fn test_plan_single() {
        let store = InMemoryStore::new().with_dirs(&[
            "/lib/Single Vol/Single c01",
            "/lib/Single Vol/Single c02",
            "/lib/Single Vol/Single c03",
        ]);
        let mut opts = Options::new("Just One", "/lib/Single Vol");
        opts.single = true;
        let plan = run(&store, &opts).unwrap();

        assert_eq!(plan.base(), Path::new("/lib"));
        assert_eq!(plan.transform.old(), "Single Vol");
        assert_eq!(plan.transform.new_name(), Some("Just One"));
        assert_eq!(
            names(&plan.transform),
            vec![
                ("Single c01".to_string(), Some("Just One c01".to_string())),
                ("Single c02".to_string(), Some("Just One c02".to_string())),
                ("Single c03".to_string(), Some("Just One c03".to_string())),
            ]
        );
    }

    #[test]
    fn test_bad_template_fails_before_listing() {
        let mut opts = Options::new("S", "/lib/missing");
        opts.chapter.template = "%l %z".to_string();
        let result = run(&InMemoryStore::new(), &opts);
        assert!(matches!(result, Err(TankobonError::Format(_))));
    }

    #[test]
    fn test_bad_glob() {
        let mut opts = Options::new("S", "/lib/S");
        opts.glob = "[".to_string();
        let result = run(&InMemoryStore::new().with_dirs(&["/lib/S"]), &opts);
        assert!(matches!(result, Err(TankobonError::Pattern(_))));
    }
}
