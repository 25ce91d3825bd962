//! Render projector: `AppState` → [`RenderPass`].
//!
//! Pure functions. The same state always yields the same pass; the caller
//! applies it to the [`Document`](super::view::Document).

use crate::api::Beer;
use crate::ui::store::AppState;
use crate::ui::view::{Block, Branch, Op, Region, RenderPass, ReviewItem};

pub const REVIEW_TRIGGER_CLASS: &str = "js-review";
pub const REVIEW_TRIGGER_LABEL: &str = "Click to leave a review";

/// Banners shown in the error region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorBanner {
    /// Search matched nothing.
    NotFound,
    /// Signup rejected with 422.
    UsernameTaken,
    /// Login rejected with 422.
    AuthFailed,
    /// Review attempted without a stored credential.
    LoginRequired,
    /// Review attempted while no searched beer is located.
    NoBeerSelected,
}

impl ErrorBanner {
    pub fn message(self) -> &'static str {
        match self {
            ErrorBanner::NotFound => "Sorry, that beer is not in our database.",
            ErrorBanner::UsernameTaken => "That username is already taken.",
            ErrorBanner::AuthFailed => "Login failed. Check your username and password.",
            ErrorBanner::LoginRequired => "Please log in to leave a review.",
            ErrorBanner::NoBeerSelected => "Search for a beer before leaving a review.",
        }
    }
}

/// Project the state.
///
/// 1. Search form requested: show it, hide the landing page.
/// 2. Hide the error and logged-in banners.
/// 3. Then the first matching branch: review form (appended), beer info
///    (replacing the results), or hide the auth forms when logged in.
pub fn render(state: &AppState) -> RenderPass {
    let mut ops = Vec::new();

    if state.show_search_form() {
        ops.push(Op::Show(Region::BeerForm));
        ops.push(Op::Hide(Region::StarterPage));
    }

    ops.push(Op::Hide(Region::LoginError));
    ops.push(Op::Hide(Region::LoggedIn));

    let branch = if state.review_entry() {
        ops.push(Op::Append {
            region: Region::Results,
            blocks: vec![Block::ReviewForm],
        });
        Branch::ReviewEntry
    } else if let Some((beer, name)) = state
        .beer_data()
        .and_then(|beer| beer.name.as_deref().map(|name| (beer, name)))
    {
        ops.push(Op::Replace {
            region: Region::Results,
            blocks: beer_blocks(beer, name),
        });
        ops.push(Op::Show(Region::Results));
        Branch::BeerInfo
    } else if state.user_logged_in() {
        ops.push(Op::Hide(Region::LoginForm));
        ops.push(Op::Hide(Region::SignupForm));
        Branch::LoggedIn
    } else {
        Branch::Untouched
    };

    RenderPass { branch, ops }
}

/// Show a banner in the error region.
///
/// Run after [`render`], which hides the region at the start of every pass.
pub fn render_error_message(banner: ErrorBanner) -> RenderPass {
    let mut pass = RenderPass::new(Branch::Auxiliary);
    pass.push(Op::Replace {
        region: Region::LoginError,
        blocks: vec![Block::Text(banner.message().to_string())],
    });
    pass.push(Op::Show(Region::LoginError));
    pass
}

/// Announce a successful login/signup.
pub fn render_login_banner(username: &str) -> RenderPass {
    let text = if username.is_empty() {
        "You are logged in.".to_string()
    } else {
        format!("Logged in as {username}.")
    };
    let mut pass = RenderPass::new(Branch::Auxiliary);
    pass.push(Op::Replace {
        region: Region::LoggedIn,
        blocks: vec![Block::Text(text)],
    });
    pass.push(Op::Show(Region::LoggedIn));
    pass.push(Op::Show(Region::LogoutButton));
    pass
}

/// Bring the auth forms back after logout.
pub fn render_logout() -> RenderPass {
    let mut pass = RenderPass::new(Branch::Auxiliary);
    pass.push(Op::Show(Region::LoginForm));
    pass.push(Op::Show(Region::SignupForm));
    pass.push(Op::Hide(Region::LogoutButton));
    pass.push(Op::Hide(Region::LoggedIn));
    pass
}

fn beer_blocks(beer: &Beer, name: &str) -> Vec<Block> {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    let measure = |value: &Option<crate::api::Measure>| {
        value.as_ref().map(ToString::to_string).unwrap_or_default()
    };

    let reviews = beer
        .reviews
        .iter()
        .map(|review| ReviewItem {
            author: format!("{} {}", review.author.first_name, review.author.last_name),
            comment: review.comment.clone(),
        })
        .collect();

    vec![
        Block::Heading {
            level: 2,
            text: format!("Beer Name: {name}"),
        },
        Block::Field {
            label: "Style",
            value: text(&beer.style),
        },
        Block::Field {
            label: "ABV",
            value: measure(&beer.abv),
        },
        Block::Field {
            label: "IBU",
            value: measure(&beer.ibu),
        },
        Block::Field {
            label: "Description",
            value: text(&beer.description),
        },
        Block::Field {
            label: "Brewery",
            value: text(&beer.brewery),
        },
        Block::Heading {
            level: 3,
            text: "Reviews:".to_string(),
        },
        Block::ReviewList(reviews),
        Block::Button {
            class: REVIEW_TRIGGER_CLASS,
            label: REVIEW_TRIGGER_LABEL.to_string(),
        },
    ]
}
