//! Theme application: site colors → global CSS custom properties.
//!
//! # Responsibilities
//! - Translate the `colors` group into `--color-*` variables
//! - Reject values that could break out of a CSS declaration
//! - Hold the current variable set for every rendered page
//!
//! # Design Decisions
//! - Variables are swapped as a whole set (`ArcSwap`), never patched
//! - Applying an identical set is a no-op: nothing is stored and the
//!   revision does not move
//! - The sheet is shared by every provider instance; a mount claims it,
//!   and fetch results from any other instance are dropped

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::site_config::model::ColorConfig;

pub const PRIMARY_VAR: &str = "--color-primary";
pub const ACCENT_VAR: &str = "--color-accent";

/// Resolved CSS variables, ordered by name.
pub type ThemeVars = BTreeMap<&'static str, String>;

/// Build the variable set for `colors`. Unsafe values fall back to the
/// default color for that slot.
pub fn theme_vars(colors: &ColorConfig) -> ThemeVars {
    let defaults = ColorConfig::default();
    let mut vars = ThemeVars::new();
    for (name, value, fallback) in [
        (PRIMARY_VAR, &colors.primary, defaults.primary),
        (ACCENT_VAR, &colors.accent, defaults.accent),
    ] {
        let value = value.trim();
        if is_safe_color(value) {
            vars.insert(name, value.to_string());
        } else {
            tracing::warn!(var = name, value = %value, "Rejected theme color, using default");
            vars.insert(name, fallback);
        }
    }
    vars
}

/// Hex colors (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) or plain tokens and
/// functional notation built from a conservative character set.
fn is_safe_color(value: &str) -> bool {
    if value.is_empty() || value.len() > 64 {
        return false;
    }
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '(' | ')' | ',' | '.' | '%' | ' '))
}

/// Variables plus the provider instance allowed to change them.
#[derive(Debug)]
struct ThemeState {
    owner: u64,
    vars: ThemeVars,
}

/// Globally scoped theme variables shared by every page.
///
/// Only the provider that last claimed the sheet may repaint it; results
/// from a superseded provider are ignored.
#[derive(Debug)]
pub struct ThemeSheet {
    state: ArcSwap<ThemeState>,
    revision: AtomicU64,
}

impl ThemeSheet {
    /// A sheet holding the default colors, owned by no provider.
    pub fn new() -> Self {
        Self {
            state: ArcSwap::from_pointee(ThemeState {
                owner: 0,
                vars: theme_vars(&ColorConfig::default()),
            }),
            revision: AtomicU64::new(0),
        }
    }

    /// Hand the sheet to provider `owner` and paint `colors`.
    /// Returns `true` if the variable set changed.
    pub fn claim(&self, owner: u64, colors: &ColorConfig) -> bool {
        let next = theme_vars(colors);
        let prev = self.state.swap(Arc::new(ThemeState {
            owner,
            vars: next.clone(),
        }));
        self.changed(prev.vars != next)
    }

    /// Paint `colors` on behalf of `owner`. A no-op unless `owner` holds the
    /// sheet. Returns `true` if the variable set changed.
    pub fn apply(&self, owner: u64, colors: &ColorConfig) -> bool {
        let next = theme_vars(colors);
        let prev = self.state.rcu(|cur| {
            if cur.owner != owner || cur.vars == next {
                Arc::clone(cur)
            } else {
                Arc::new(ThemeState {
                    owner,
                    vars: next.clone(),
                })
            }
        });
        if prev.owner != owner {
            tracing::debug!(owner, holder = prev.owner, "Ignoring theme from superseded provider");
            return false;
        }
        self.changed(prev.vars != next)
    }

    fn changed(&self, changed: bool) -> bool {
        if changed {
            let revision = self.revision.fetch_add(1, Ordering::SeqCst) + 1;
            tracing::debug!(revision, "Theme variables applied");
        }
        changed
    }

    /// Provider instance currently holding the sheet (`0` before any mount).
    pub fn owner(&self) -> u64 {
        self.state.load().owner
    }

    /// Current variable set.
    pub fn vars(&self) -> ThemeVars {
        self.state.load().vars.clone()
    }

    /// Number of effective changes since creation.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    /// `:root { ... }` rule for the page `<style>` block.
    pub fn css(&self) -> String {
        let state = self.state.load();
        let mut css = String::from(":root {");
        for (name, value) in state.vars.iter() {
            let _ = write!(css, " {name}: {value};");
        }
        css.push_str(" }");
        css
    }
}

impl Default for ThemeSheet {
    fn default() -> Self {
        Self::new()
    }
}
