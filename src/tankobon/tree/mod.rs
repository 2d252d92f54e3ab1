//! # Node hierarchy
//!
//! A series is a three level tree: the series root, its volumes and their chapters.
//! Every node remembers the directory name it was found under and the number inferred
//! from that name.
//!
//! ## Arena
//!
//! Nodes live in a single `Vec` owned by [`Series`] and refer to each other through
//! [`NodeId`] indexes. Children are owned lists of ids; the parent link is a plain id,
//! so upward queries ([`Series::spurious`], [`Series::width`], [`Series::path`]) are a
//! walk over indexes with no shared ownership.
//!
//! ## Lifecycle
//!
//! [`Series::build`] lists the directories and infers every number in one top-down
//! pass, then applies the optional renumbering. After that the tree is only read:
//! [`Series::transform`] renders the new names into a [`Transform`] tree.
//!
//! ## Modules
//!
//! - `infer`: number inference for one directory name
//! - `populate`: listing, sibling ordering, volume/chapter population, renumbering
//! - `template`: the `%x` name template language

use crate::config::LevelOptions;
use crate::error::{Result, TankobonError};
use crate::number::Ordinal;
use crate::transform::Transform;
use glob::Pattern;
use num_bigint::BigUint;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

mod infer;
mod populate;
mod template;

pub use infer::{infer, Inference, SlotPool, Spurious};
pub use template::validate as validate_template;

/// Index of a node inside its [`Series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The series root is always the first node.
    pub const ROOT: NodeId = NodeId(0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Series,
    Volume,
    Chapter,
}

impl Level {
    pub fn depth(self) -> usize {
        match self {
            Level::Series => 0,
            Level::Volume => 1,
            Level::Chapter => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    level: Level,
    number: Option<Ordinal>,
    hoaxes: Vec<Ordinal>,
    extra: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// Original directory name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn number(&self) -> Option<&Ordinal> {
        self.number.as_ref()
    }

    /// Numbers found in the name that are not this node's number
    pub fn hoaxes(&self) -> &[Ordinal] {
        &self.hoaxes
    }

    /// Special or bonus label
    pub fn extra(&self) -> Option<&str> {
        self.extra.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Has a whole number (not a bonus, not a sub-release).
    pub fn is_normal(&self) -> bool {
        self.number.as_ref().map_or(false, Ordinal::is_normal)
    }

    /// Skipped nodes do not lend their number to the names of their children.
    pub fn skip(&self) -> bool {
        self.level == Level::Series || self.number.is_none()
    }
}

/// Sibling order: numbered before numberless, then by number, then unlabelled first.
fn compare(a: &Node, b: &Node) -> Ordering {
    match (&a.number, &b.number) {
        (Some(x), Some(y)) => x.cmp(y).then_with(|| a.extra.cmp(&b.extra)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingChapters {
    pub volume: String,
    pub numbers: Vec<BigUint>,
}

/// Gaps found while populating. None of them stops the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Volume slots no directory claimed
    pub missing_volumes: Vec<BigUint>,
    pub missing_chapters: Vec<MissingChapters>,
    /// Volumes dropped because a chapter name could not be read
    pub skipped_volumes: Vec<String>,
}

impl Diagnostics {
    pub fn is_empty(&self) -> bool {
        self.missing_volumes.is_empty()
            && self.missing_chapters.is_empty()
            && self.skipped_volumes.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Series {
    nodes: Vec<Node>,
    /// Directory containing the series root
    origin: PathBuf,
    /// The root directory is the only volume
    single: bool,
    pattern: Pattern,
    /// Automatic number width per depth
    widths: [usize; 3],
    volume: LevelOptions,
    chapter: LevelOptions,
    diagnostics: Diagnostics,
}

impl Series {
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn root(&self) -> &Node {
        self.node(NodeId::ROOT)
    }

    pub fn volumes(&self) -> &[NodeId] {
        self.root().children()
    }

    pub fn is_single(&self) -> bool {
        self.single
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn level_options(&self, level: Level) -> Option<&LevelOptions> {
        match level {
            Level::Series => None,
            Level::Volume => Some(&self.volume),
            Level::Chapter => Some(&self.chapter),
        }
    }

    /// Current location of a node on disk.
    pub fn path(&self, id: NodeId) -> PathBuf {
        let node = self.node(id);
        match node.parent {
            Some(parent) => self.path(parent).join(&node.name),
            // In single mode the root directory is the volume, one level down.
            None if self.single => self.origin.clone(),
            None => self.origin.join(&node.name),
        }
    }

    /// Numbers the children of `id` may carry only because of their ancestors.
    ///
    /// Own values first, then the parent's, up to the root.
    pub fn spurious(&self, id: NodeId) -> Spurious {
        let mut spurious = Spurious::default();
        let mut current = Some(id);
        while let Some(cur) = current {
            let node = self.node(cur);
            spurious.hoaxes.extend(node.hoaxes.iter().cloned());
            if let Some(number) = &node.number {
                spurious.levels.push(Ordinal::from(number.whole().clone()));
            }
            current = node.parent;
        }
        spurious
    }

    /// Digits used for the number of `id`: the level override, else the automatic
    /// width computed for its depth.
    pub fn width(&self, id: NodeId) -> usize {
        let node = self.node(id);
        self.level_options(node.level)
            .and_then(|opts| opts.width)
            .unwrap_or(self.widths[node.level.depth()])
    }

    /// Highest whole chapter number of a volume, 0 when it has none.
    pub fn last_chapter(&self, vol: NodeId) -> BigUint {
        self.node(vol)
            .children
            .iter()
            .filter_map(|c| self.node(*c).number.as_ref())
            .map(Ordinal::whole)
            .max()
            .cloned()
            .unwrap_or_default()
    }

    /// Build the rename plan of the whole tree.
    ///
    /// The root keeps its name. In single mode the root is left out and the volume
    /// becomes the top of the plan.
    pub fn transform(&self) -> Result<Transform> {
        let mut volumes = self
            .volumes()
            .iter()
            .map(|v| self.transform_node(*v))
            .collect::<Result<Vec<_>>>()?;

        if !self.single {
            return Ok(Transform::new(self.root().name.clone(), None).with_children(volumes));
        }
        if volumes.len() != 1 {
            return Err(TankobonError::Store(format!(
                "single series must have one volume, found {}",
                volumes.len()
            )));
        }
        Ok(volumes.remove(0))
    }

    fn transform_node(&self, id: NodeId) -> Result<Transform> {
        let node = self.node(id);
        let children = node
            .children
            .iter()
            .map(|c| self.transform_node(*c))
            .collect::<Result<Vec<_>>>()?;
        Ok(Transform::new(node.name.clone(), Some(self.render(id)?)).with_children(children))
    }
}

fn digits(n: &BigUint) -> usize {
    n.to_string().len()
}
