//! Declarative UI description.
//!
//! The projector never touches a terminal or a browser. It emits a
//! [`RenderPass`]: a list of operations on named regions. Passes are
//! applied to a retained [`Document`], which the terminal UI draws and
//! [`markup`](super::markup) serializes.

use std::collections::BTreeMap;

/// Addressable UI regions, keyed by their `js-*` class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    StarterPage,
    ShowResultsButton,
    BeerForm,
    Results,
    LoginError,
    LoggedIn,
    LoginForm,
    SignupForm,
    LogoutButton,
}

impl Region {
    pub const ALL: [Region; 9] = [
        Region::StarterPage,
        Region::ShowResultsButton,
        Region::BeerForm,
        Region::Results,
        Region::LoginError,
        Region::LoggedIn,
        Region::LoginForm,
        Region::SignupForm,
        Region::LogoutButton,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            Region::StarterPage => "js-starter-page",
            Region::ShowResultsButton => "js-show-results-button",
            Region::BeerForm => "js-beer-form",
            Region::Results => "js-results",
            Region::LoginError => "js-login-error",
            Region::LoggedIn => "js-loggedIn",
            Region::LoginForm => "js-login-form",
            Region::SignupForm => "js-signup-form",
            Region::LogoutButton => "js-logout-button",
        }
    }

    /// Visibility on a fresh page.
    fn initially_visible(self) -> bool {
        matches!(
            self,
            Region::StarterPage
                | Region::ShowResultsButton
                | Region::LoginForm
                | Region::SignupForm
        )
    }
}

/// One line of a rendered review list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub author: String,
    pub comment: String,
}

/// Content placed inside a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Field { label: &'static str, value: String },
    ReviewList(Vec<ReviewItem>),
    /// Clickable control, identified by its class.
    Button { class: &'static str, label: String },
    /// Review-submission form.
    ReviewForm,
    Text(String),
}

/// A single region mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Show(Region),
    Hide(Region),
    /// Overwrite the region's content.
    Replace { region: Region, blocks: Vec<Block> },
    /// Add to the end of the region's content.
    Append { region: Region, blocks: Vec<Block> },
}

/// Which content branch of the projector fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    ReviewEntry,
    BeerInfo,
    LoggedIn,
    /// No branch matched; only the unconditional ops ran.
    Untouched,
    /// A standalone pass (banner, logout) outside the main projection.
    Auxiliary,
}

/// Output of one projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPass {
    pub branch: Branch,
    pub ops: Vec<Op>,
}

impl RenderPass {
    pub fn new(branch: Branch) -> Self {
        Self {
            branch,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// True if any op writes content into `region`.
    pub fn writes(&self, region: Region) -> bool {
        self.ops.iter().any(|op| match op {
            Op::Replace { region: r, .. } | Op::Append { region: r, .. } => *r == region,
            _ => false,
        })
    }

    pub fn hides(&self, region: Region) -> bool {
        self.ops.contains(&Op::Hide(region))
    }

    pub fn shows(&self, region: Region) -> bool {
        self.ops.contains(&Op::Show(region))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionState {
    pub visible: bool,
    pub blocks: Vec<Block>,
}

/// Retained UI: what every region currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    regions: BTreeMap<Region, RegionState>,
}

impl Default for Document {
    fn default() -> Self {
        let regions = Region::ALL
            .iter()
            .map(|&region| {
                (
                    region,
                    RegionState {
                        visible: region.initially_visible(),
                        blocks: Vec::new(),
                    },
                )
            })
            .collect();
        Self { regions }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, pass: &RenderPass) {
        for op in &pass.ops {
            match op {
                Op::Show(region) => self.region_mut(*region).visible = true,
                Op::Hide(region) => self.region_mut(*region).visible = false,
                Op::Replace { region, blocks } => {
                    self.region_mut(*region).blocks = blocks.clone();
                }
                Op::Append { region, blocks } => {
                    self.region_mut(*region).blocks.extend(blocks.iter().cloned());
                }
            }
        }
    }

    pub fn region(&self, region: Region) -> &RegionState {
        // Every region is inserted by `Default` and never removed.
        &self.regions[&region]
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.region(region).visible
    }

    pub fn blocks(&self, region: Region) -> &[Block] {
        &self.region(region).blocks
    }

    /// Regions in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Region, &RegionState)> {
        self.regions.iter().map(|(region, state)| (*region, state))
    }

    fn region_mut(&mut self, region: Region) -> &mut RegionState {
        self.regions.entry(region).or_insert_with(|| RegionState {
            visible: false,
            blocks: Vec::new(),
        })
    }
}
