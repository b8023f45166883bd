// Site sections and presentation primitives
// Developed by the Axie Studio team (c)2025

mod cta;
mod features;
mod footer;
mod header;
mod hero;
mod mission;
mod stats;
pub mod ui;
mod values;
mod video_dialog;

pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use header::{Header, HeaderView};
pub use hero::Hero;
pub use mission::Mission;
pub use stats::Stats;
pub use values::Values;
pub use video_dialog::VideoDialog;

use crate::config::Tone;
use crate::theme::Role;

/// Palette role for a section background.
pub fn tone_role(tone: Tone) -> Role {
    match tone {
        Tone::Surface => Role::Surface,
        Tone::Alt => Role::SurfaceAlt,
        Tone::Accent => Role::AccentBand,
        Tone::Page => Role::Page,
    }
}
