use super::infer::{infer, Inference, SlotPool};
use super::{compare, digits, Diagnostics, Level, MissingChapters, Node, NodeId, Series};
use crate::config::{Options, Renumber};
use crate::error::{Result, TankobonError};
use crate::number::Ordinal;
use crate::store::DirStore;
use glob::Pattern;
use num_bigint::BigUint;
use num_traits::Zero;
use std::path::Path;
use tracing::{debug, info, warn};

impl Series {
    /// List the directories under `opts.root` and infer every number.
    ///
    /// `opts.root` must name a directory (a canonical path, not `.`). Numbers appearing
    /// in the root name and the `hoax` values are never taken as volume or chapter
    /// numbers.
    pub fn build<S: DirStore>(opts: &Options, store: &S) -> Result<Self> {
        let opts = opts.clone().resolved();
        let name = opts
            .root
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                TankobonError::Config(format!(
                    "series directory has no usable name: {}",
                    opts.root.display()
                ))
            })?
            .to_string();
        let origin = opts
            .root
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let mut hoaxes = Ordinal::extract(&name, false)?;
        hoaxes.extend(opts.hoax.iter().map(|n| Ordinal::from(*n)));
        debug!("Series {} hoaxes {:?}", name, hoaxes);

        let root = Node {
            name,
            level: Level::Series,
            number: None,
            hoaxes,
            extra: None,
            parent: None,
            children: Vec::new(),
        };
        let mut series = Self {
            nodes: vec![root],
            origin,
            single: opts.single,
            pattern: Pattern::new(&opts.glob)?,
            widths: [0; 3],
            volume: opts.volume,
            chapter: opts.chapter,
            diagnostics: Diagnostics::default(),
        };

        if series.single {
            series.populate_single(store)?;
        } else {
            series.populate_multi(store)?;
        }
        series.renumber(opts.renumber);
        Ok(series)
    }

    fn add_node(&mut self, parent: NodeId, name: String, level: Level, inf: Inference) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name,
            level,
            number: inf.number,
            hoaxes: inf.hoaxes,
            extra: inf.extra,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    fn sort_children(&mut self, id: NodeId) {
        let mut children = std::mem::take(&mut self.nodes[id.0].children);
        children.sort_by(|a, b| compare(&self.nodes[a.0], &self.nodes[b.0]));
        self.nodes[id.0].children = children;
    }

    fn populate_multi<S: DirStore>(&mut self, store: &S) -> Result<()> {
        let names = store.list_subdirs(&self.path(NodeId::ROOT), &self.pattern)?;
        let mut pool = SlotPool::contiguous(BigUint::from(self.volume.first), names.len());
        self.widths[Level::Volume.depth()] = pool.last().map_or(1, digits).max(2);

        let spurious = self.spurious(NodeId::ROOT);
        let mut inferred = Vec::with_capacity(names.len());
        for name in names {
            let inf = infer(&name, &spurious, Some(&mut pool), &self.volume)?;
            inferred.push((name, inf));
        }
        for (name, inf) in inferred {
            self.add_node(NodeId::ROOT, name, Level::Volume, inf);
        }
        self.sort_children(NodeId::ROOT);

        if !pool.is_empty() {
            info!("Missing volumes {:?}", pool.remaining());
            self.diagnostics.missing_volumes = pool.remaining().to_vec();
        }

        if self.volume.flat {
            return Ok(());
        }

        let volumes = self.nodes[NodeId::ROOT.0].children.clone();
        let mut kept = Vec::with_capacity(volumes.len());
        let mut next = None;
        let mut width = 2;
        for vol in volumes {
            match self.populate_volume(vol, next.clone(), store) {
                Ok(n) => {
                    next = n;
                    width = width.max(digits(&self.last_chapter(vol)));
                    kept.push(vol);
                }
                Err(err) if err.is_name_error() => self.skip_volume(vol, &err),
                Err(err) => return Err(err),
            }
        }
        self.nodes[NodeId::ROOT.0].children = kept;
        self.widths[Level::Chapter.depth()] = width;
        Ok(())
    }

    fn populate_single<S: DirStore>(&mut self, store: &S) -> Result<()> {
        self.widths[Level::Volume.depth()] = 2;
        self.volume.bonus = None;
        self.volume.special = None;

        let name = self.root().name.clone();
        let inf = infer(&name, &self.spurious(NodeId::ROOT), None, &self.volume)?;
        let vol = self.add_node(NodeId::ROOT, name, Level::Volume, inf);

        if self.volume.flat {
            return Ok(());
        }
        match self.populate_volume(vol, None, store) {
            Ok(_) => {}
            Err(err) if err.is_name_error() => self.skip_volume(vol, &err),
            Err(err) => return Err(err),
        }
        self.widths[Level::Chapter.depth()] = digits(&self.last_chapter(vol)).max(2);
        Ok(())
    }

    fn skip_volume(&mut self, vol: NodeId, err: &TankobonError) {
        let name = self.node(vol).name.clone();
        warn!("Ignoring volume {}: {}", name, err);
        self.nodes[vol.0].children.clear();
        self.diagnostics.skipped_volumes.push(name);
    }

    /// Infer the chapters of one volume.
    ///
    /// Chapters are expected to continue from `last`, or to start at the first chapter
    /// number. Returns where the next volume starts: `None` with flat chapters, and
    /// `last` unchanged for an empty volume.
    fn populate_volume<S: DirStore>(
        &mut self,
        vol: NodeId,
        last: Option<BigUint>,
        store: &S,
    ) -> Result<Option<BigUint>> {
        let names = store.list_subdirs(&self.path(vol), &self.pattern)?;
        if names.is_empty() {
            info!("Empty folder: {}", self.node(vol).name);
            return Ok(last);
        }

        let first = last.unwrap_or_else(|| BigUint::from(self.chapter.first));
        let mut pool = SlotPool::contiguous(first, names.len());
        let mut top = pool.last().cloned();
        let spurious = self.spurious(vol);
        let mut inferred = Vec::with_capacity(names.len());
        for name in names {
            let inf = infer(&name, &spurious, Some(&mut pool), &self.chapter)?;
            inferred.push((name, inf));
        }

        // A bonus or sub-release takes a directory without taking a slot, so the
        // highest expected slot is dropped while it is still free.
        for (name, inf) in inferred {
            let id = self.add_node(vol, name, Level::Chapter, inf);
            if self.node(id).is_normal() {
                continue;
            }
            if let Some(t) = &top {
                if pool.discard_top(t) {
                    top = (!t.is_zero()).then(|| t - 1u32);
                }
            }
        }

        if !pool.is_empty() {
            let volume = self.node(vol).name.clone();
            info!("Volume {} missing chapters {:?}", volume, pool.remaining());
            self.diagnostics.missing_chapters.push(MissingChapters {
                volume,
                numbers: pool.remaining().to_vec(),
            });
        }

        self.sort_children(vol);
        self.number_bonus_chapters(vol);

        if self.chapter.flat {
            Ok(None)
        } else {
            Ok(Some(self.last_chapter(vol) + 1u32))
        }
    }

    /// Bonus chapters share a label; the second one on gets a counter.
    fn number_bonus_chapters(&mut self, vol: NodeId) {
        let children = self.nodes[vol.0].children.clone();
        let mut seen = 0;
        for id in children {
            let node = &mut self.nodes[id.0];
            if node.number.is_some() {
                continue;
            }
            seen += 1;
            if seen > 1 {
                if let Some(extra) = node.extra.as_mut() {
                    extra.push_str(&format!(" {}", seen));
                }
            }
        }
    }

    /// Rewrite chapter numbers as a gapless sequence.
    ///
    /// Normal chapters advance the counter, sub-releases keep their decimal part on the
    /// current value. `Flat` restarts at 1 in every volume, `Continuous` carries on.
    pub fn renumber(&mut self, mode: Renumber) {
        if mode == Renumber::Asis {
            return;
        }

        let volumes = self.nodes[NodeId::ROOT.0].children.clone();
        let mut counter = BigUint::zero();
        for vol in &volumes {
            let last = self.renumber_volume(*vol, counter.clone());
            if mode == Renumber::Continuous {
                counter = last;
            }
        }

        let widest = volumes
            .iter()
            .map(|v| self.last_chapter(*v))
            .max()
            .unwrap_or_default();
        self.widths[Level::Chapter.depth()] = digits(&widest).max(2);
    }

    fn renumber_volume(&mut self, vol: NodeId, start: BigUint) -> BigUint {
        let mut counter = start;
        for id in self.nodes[vol.0].children.clone() {
            let Some(number) = self.nodes[id.0].number.as_mut() else {
                continue;
            };
            if number.is_normal() {
                counter += 1u32;
            }
            number.set_whole(counter.clone());
        }
        counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn store(dirs: &[&str]) -> InMemoryStore {
        InMemoryStore::new().with_dirs(dirs)
    }

    fn numbers(series: &Series, vol: NodeId) -> Vec<String> {
        series
            .node(vol)
            .children()
            .iter()
            .map(|c| {
                let node = series.node(*c);
                match (node.number(), node.extra()) {
                    (Some(n), Some(e)) => format!("{}{}", n, e),
                    (Some(n), None) => n.to_string(),
                    (None, Some(e)) => e.to_string(),
                    (None, None) => "-".to_string(),
                }
            })
            .collect()
    }

    fn nominal() -> InMemoryStore {
        store(&[
            "/lib/nominal/Nom v01/Nom v01 c01",
            "/lib/nominal/Nom v01/Nom v01 c02",
            "/lib/nominal/Nom v01/Nom v01 c03",
            "/lib/nominal/Nom v01/Nom v01 c04",
            "/lib/nominal/Nom v02/Nom v02 c05",
            "/lib/nominal/Nom v02/Nom v02 c06",
            "/lib/nominal/Nom v02/Nom v02 c07",
            "/lib/nominal/Nom v02/Nom v02 c07.2",
            "/lib/nominal/Nom v02/Nom v02 c08",
            "/lib/nominal/Nom v02/Nom v02 c09",
            "/lib/nominal/Nom v03/Nom v03 c10",
            "/lib/nominal/Nom v03/Nom v03 c11",
            "/lib/nominal/Nom v03/Nom v03 c12",
            "/lib/nominal/Nom v03/Nom v03 c13",
            "/lib/nominal/Nom v03/Nom v03 oMake",
        ])
    }

    #[test]
    fn test_nominal_series() {
        let opts = Options::new("Normal Series", "/lib/nominal");
        let series = Series::build(&opts, &nominal()).unwrap();

        let volumes = series.volumes();
        assert_eq!(volumes.len(), 3);
        assert_eq!(numbers(&series, NodeId::ROOT), vec!["1", "2", "3"]);

        assert_eq!(numbers(&series, volumes[0]), vec!["1", "2", "3", "4"]);
        assert_eq!(
            numbers(&series, volumes[1]),
            vec!["5", "6", "7", "7.2", "8", "9"]
        );
        assert_eq!(
            numbers(&series, volumes[2]),
            vec!["10", "11", "12", "13", "Bonus"]
        );
        assert!(series.diagnostics().is_empty());
        assert_eq!(series.width(volumes[0]), 2);
        assert_eq!(series.width(series.node(volumes[2]).children()[0]), 2);
    }

    #[test]
    fn test_number_in_series_name() {
        let store = store(&[
            "/lib/Num 1 in title/Num 1 in title v01/Num 1 in title v01 c01",
            "/lib/Num 1 in title/Num 1 in title v01/Num 1 in title v01 c02",
            "/lib/Num 1 in title/Num 1 in title v02/Num 1 in title v02 c03",
            "/lib/Num 1 in title/Num 1 in title v02/Num 1 in title v02 c04",
            "/lib/Num 1 in title/Num 1 in title v03/Num 1 in title v03 c05",
        ]);
        let opts = Options::new("Num1", "/lib/Num 1 in title");
        let series = Series::build(&opts, &store).unwrap();

        let volumes = series.volumes();
        assert_eq!(numbers(&series, NodeId::ROOT), vec!["1", "2", "3"]);
        assert_eq!(numbers(&series, volumes[0]), vec!["1", "2"]);
        assert_eq!(numbers(&series, volumes[1]), vec!["3", "4"]);
        assert_eq!(numbers(&series, volumes[2]), vec!["5"]);
    }

    #[test]
    fn test_missing_first_volume() {
        let store = store(&[
            "/lib/Gap/Gap v02/Gap v02 c01",
            "/lib/Gap/Gap v02/Gap v02 c02",
            "/lib/Gap/Gap v03/Gap v03 c03",
            "/lib/Gap/Gap v03/Gap v03 c04",
        ]);
        let series = Series::build(&Options::new("Gap", "/lib/Gap"), &store).unwrap();

        assert_eq!(numbers(&series, NodeId::ROOT), vec!["2", "3 Special"]);
        assert_eq!(series.diagnostics().missing_volumes, vec![BigUint::from(1u32)]);
        let volumes = series.volumes();
        assert_eq!(numbers(&series, volumes[0]), vec!["1", "2"]);
        assert_eq!(numbers(&series, volumes[1]), vec!["3", "4"]);
    }

    #[test]
    fn test_missing_volume_with_shifted_start() {
        let store = store(&[
            "/lib/Miss vol 1/Miss Vol 1 v02/Miss vol 1 v02 c04",
            "/lib/Miss vol 1/Miss Vol 1 v02/Miss vol 1 v02 c05",
            "/lib/Miss vol 1/Miss Vol 1 v03/Miss vol 1 v03 c06",
        ]);
        let mut opts = Options::new("Miss", "/lib/Miss vol 1");
        opts.volume.first = 2;
        opts.chapter.first = 4;
        let series = Series::build(&opts, &store).unwrap();

        assert_eq!(numbers(&series, NodeId::ROOT), vec!["2", "3"]);
        let volumes = series.volumes();
        assert_eq!(numbers(&series, volumes[0]), vec!["4", "5"]);
        assert_eq!(numbers(&series, volumes[1]), vec!["6"]);
        assert!(series.diagnostics().is_empty());
    }

    #[test]
    fn test_missing_chapters_are_reported() {
        let store = store(&[
            "/lib/Holes/Holes v01/Holes v01 c01",
            "/lib/Holes/Holes v01/Holes v01 c03",
            "/lib/Holes/Holes v01/Holes v01 c04",
        ]);
        let series = Series::build(&Options::new("Holes", "/lib/Holes"), &store).unwrap();
        let vol = series.volumes()[0];
        // Slot 2 stays free; 4 falls outside 1..=3 and is labelled.
        assert_eq!(numbers(&series, vol), vec!["1", "3", "4 oMake"]);
        assert_eq!(
            series.diagnostics().missing_chapters,
            vec![MissingChapters {
                volume: "Holes v01".to_string(),
                numbers: vec![BigUint::from(2u32)],
            }]
        );
    }

    #[test]
    fn test_flat_volumes() {
        let store = store(&[
            "/lib/Flat/Flat v01",
            "/lib/Flat/Flat v02",
            "/lib/Flat/Flat v03",
        ]);
        let mut opts = Options::new("Flat", "/lib/Flat");
        opts.volume.flat = true;
        let series = Series::build(&opts, &store).unwrap();
        assert_eq!(numbers(&series, NodeId::ROOT), vec!["1", "2", "3"]);
        assert!(series
            .volumes()
            .iter()
            .all(|v| series.node(*v).children().is_empty()));
    }

    fn restarting() -> InMemoryStore {
        store(&[
            "/lib/Reset/Reset v01/Reset v01 c01",
            "/lib/Reset/Reset v01/Reset v01 c02",
            "/lib/Reset/Reset v01/Reset v01 c03",
            "/lib/Reset/Reset v01/Reset v01 c04",
            "/lib/Reset/Reset v02/Reset v02 c01",
            "/lib/Reset/Reset v02/Reset v02 c01.5",
            "/lib/Reset/Reset v02/Reset v02 c02",
            "/lib/Reset/Reset v02/Reset v02 c03",
            "/lib/Reset/Reset v03/Reset v03 c01",
            "/lib/Reset/Reset v03/Reset v03 c02",
        ])
    }

    #[test]
    fn test_flat_chapters_restart() {
        let mut opts = Options::new("Reset", "/lib/Reset");
        opts.chapter.flat = true;
        let series = Series::build(&opts, &restarting()).unwrap();
        let volumes = series.volumes();
        assert_eq!(numbers(&series, volumes[0]), vec!["1", "2", "3", "4"]);
        assert_eq!(numbers(&series, volumes[1]), vec!["1", "1.5", "2", "3"]);
        assert_eq!(numbers(&series, volumes[2]), vec!["1", "2"]);
        assert!(series.diagnostics().is_empty());
    }

    #[test]
    fn test_renumber_continuous() {
        let mut opts = Options::new("Reset", "/lib/Reset");
        opts.chapter.flat = true;
        opts.renumber = Renumber::Continuous;
        let series = Series::build(&opts, &restarting()).unwrap();
        let volumes = series.volumes();
        assert_eq!(numbers(&series, volumes[0]), vec!["1", "2", "3", "4"]);
        assert_eq!(numbers(&series, volumes[1]), vec!["5", "5.5", "6", "7"]);
        assert_eq!(numbers(&series, volumes[2]), vec!["8", "9"]);
    }

    #[test]
    fn test_renumber_flat() {
        let opts = Options {
            renumber: Renumber::Flat,
            ..Options::new("Normal Series", "/lib/nominal")
        };
        let series = Series::build(&opts, &nominal()).unwrap();
        let volumes = series.volumes();
        assert_eq!(numbers(&series, volumes[1]), vec!["1", "2", "3", "3.2", "4", "5"]);
        assert_eq!(numbers(&series, volumes[2]), vec!["1", "2", "3", "4", "Bonus"]);
    }

    #[test]
    fn test_renumber_closes_gaps() {
        let store = store(&[
            "/lib/Holes/Holes v01/Holes v01 c01",
            "/lib/Holes/Holes v01/Holes v01 c03",
            "/lib/Holes/Holes v02/Holes v02 c07",
        ]);
        let mut opts = Options::new("Holes", "/lib/Holes");
        opts.renumber = Renumber::Continuous;
        let series = Series::build(&opts, &store).unwrap();
        let volumes = series.volumes();
        assert_eq!(numbers(&series, volumes[0]), vec!["1", "2 oMake"]);
        assert_eq!(numbers(&series, volumes[1]), vec!["3 oMake"]);
    }

    #[test]
    fn test_bonus_chapters_are_counted() {
        let store = store(&[
            "/lib/Extra/Extra v01/Extra v01 c01",
            "/lib/Extra/Extra v01/Extra v01 c02",
            "/lib/Extra/Extra v02/Extra v02 afterword",
            "/lib/Extra/Extra v02/Extra v02 c03",
            "/lib/Extra/Extra v02/Extra v02 interview",
            "/lib/Extra/Extra v02/Extra v02 omake",
        ]);
        let series = Series::build(&Options::new("Extra", "/lib/Extra"), &store).unwrap();
        let vol = series.volumes()[1];
        assert_eq!(
            numbers(&series, vol),
            vec!["3", "Bonus", "Bonus 2", "Bonus 3"]
        );
        // The three bonus chapters release slots 6, 5 and 4.
        assert!(series.diagnostics().is_empty());
    }

    #[test]
    fn test_ambiguous_chapter_stops_build() {
        let store = store(&[
            "/lib/Amb/Amb v01/Amb v01 c01 c02",
            "/lib/Amb/Amb v01/Amb v01 x",
            "/lib/Amb/Amb v02/Amb v02 c03",
        ]);
        let series = Series::build(&Options::new("Amb", "/lib/Amb"), &store);
        // CannotChoose is not a name error: the whole run stops.
        assert!(matches!(series, Err(TankobonError::CannotChoose(_))));
    }

    #[test]
    fn test_unreadable_chapter_skips_volume() {
        let store = store(&[
            "/lib/Bad/Bad v01/Bad v01 I",
            "/lib/Bad/Bad v02/Bad v02 IC",
            "/lib/Bad/Bad v03/Bad v03 II",
        ]);
        let mut opts = Options::new("Bad", "/lib/Bad");
        opts.chapter.roman = true;
        let series = Series::build(&opts, &store).unwrap();
        assert_eq!(series.volumes().len(), 2);
        assert_eq!(series.diagnostics().skipped_volumes, vec!["Bad v02"]);
        let last = series.volumes()[1];
        assert_eq!(numbers(&series, last), vec!["2"]);
    }

    #[test]
    fn test_long_digit_runs_are_candidates() {
        let store = store(&[
            "/lib/S/S v01 [9784088820000]/S v01 c01",
            "/lib/S/S v01 [9784088820000]/S v01 c02 ISBN 9784088820017",
            "/lib/S/S v02/S v02 c03",
        ]);
        let series = Series::build(&Options::new("S", "/lib/S"), &store).unwrap();

        assert_eq!(numbers(&series, NodeId::ROOT), vec!["1", "2"]);
        let volumes = series.volumes();
        assert_eq!(numbers(&series, volumes[0]), vec!["1", "2"]);
        assert_eq!(numbers(&series, volumes[1]), vec!["3"]);
        assert!(series.diagnostics().is_empty());
    }

    #[test]
    fn test_huge_special_chapter_continues_numbering() {
        let store = store(&[
            "/lib/S/S v01/S v01 c01",
            "/lib/S/S v01/S v01 4294967295",
            "/lib/S/S v02/S v02 c4294967296",
        ]);
        let series = Series::build(&Options::new("S", "/lib/S"), &store).unwrap();

        let volumes = series.volumes();
        assert_eq!(numbers(&series, volumes[0]), vec!["1", "4294967295 oMake"]);
        assert_eq!(numbers(&series, volumes[1]), vec!["4294967296"]);
        assert_eq!(
            series.last_chapter(volumes[1]),
            BigUint::from(4_294_967_296u64)
        );
    }

    #[test]
    fn test_first_chapter_at_u32_max() {
        let store = store(&[
            "/lib/S/S v01/S v01 c4294967295",
            "/lib/S/S v01/S v01 c4294967296",
        ]);
        let mut opts = Options::new("S", "/lib/S");
        opts.chapter.first = u32::MAX;
        let series = Series::build(&opts, &store).unwrap();

        let vol = series.volumes()[0];
        assert_eq!(numbers(&series, vol), vec!["4294967295", "4294967296"]);
        assert!(series.diagnostics().is_empty());
        assert_eq!(series.width(series.node(vol).children()[0]), 10);
    }

    #[test]
    fn test_repeated_chapter_number_stops_build() {
        let store = store(&[
            "/lib/Rep/Rep v01/2 - chapter 2",
            "/lib/Rep/Rep v01/Rep v01 c01",
        ]);
        let series = Series::build(&Options::new("Rep", "/lib/Rep"), &store);
        assert!(matches!(series, Err(TankobonError::CannotChoose(n)) if n == "2 - chapter 2"));
    }

    #[test]
    fn test_single_volume() {
        let store = store(&[
            "/lib/Single Vol/Single c01",
            "/lib/Single Vol/Single c02",
            "/lib/Single Vol/Single c03",
        ]);
        let mut opts = Options::new("Just One", "/lib/Single Vol");
        opts.single = true;
        let series = Series::build(&opts, &store).unwrap();

        assert!(series.is_single());
        let volumes = series.volumes();
        assert_eq!(volumes.len(), 1);
        let vol = series.node(volumes[0]);
        assert_eq!(vol.name(), "Single Vol");
        assert_eq!(vol.number(), None);
        assert_eq!(vol.extra(), None);
        assert_eq!(series.path(volumes[0]), Path::new("/lib/Single Vol"));
        assert_eq!(numbers(&series, volumes[0]), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_glob_filters_directories() {
        let store = store(&[
            "/lib/G/G v01/G v01 c01",
            "/lib/G/G v02/G v02 c02",
            "/lib/G/covers",
        ]);
        let mut opts = Options::new("G", "/lib/G");
        opts.glob = "G *".to_string();
        let series = Series::build(&opts, &store).unwrap();
        assert_eq!(numbers(&series, NodeId::ROOT), vec!["1", "2"]);
    }

    #[test]
    fn test_hoax_option() {
        let store = store(&[
            "/lib/Amb/Amb v01/Amb v01 c01 c02",
            "/lib/Amb/Amb v01/Amb v01 x",
        ]);
        let mut opts = Options::new("Amb", "/lib/Amb");
        opts.hoax = vec![2];
        let series = Series::build(&opts, &store).unwrap();
        let vol = series.volumes()[0];
        assert_eq!(numbers(&series, vol), vec!["1", "Bonus"]);
    }

    #[test]
    fn test_root_without_name() {
        let result = Series::build(&Options::new("X", "/"), &InMemoryStore::new());
        assert!(matches!(result, Err(TankobonError::Config(_))));
    }
}
