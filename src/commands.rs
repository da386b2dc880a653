//! Command registry: fuzzy filter for the slash-command palette.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::state::{CommandEntry, CommandPaletteState};

/// Built-in slash commands shown in the palette.
const REGISTRY: &[(&str, &str)] = &[
    ("/set", "Set a role: /set <role> <color>"),
    ("/edit", "Set the selected role: /edit <color>"),
    ("/primary", "Set the primary color"),
    ("/secondary", "Set the secondary color"),
    ("/accent", "Set the accent color"),
    ("/background", "Set the background color"),
    ("/surface", "Set the surface color"),
    ("/reset", "Restore the default palette"),
    ("/copy tailwind", "Copy the Tailwind config"),
    ("/copy css", "Copy the CSS variables"),
    ("/help", "Show key bindings"),
    ("/quit", "Exit"),
];

pub fn registry() -> Vec<CommandEntry> {
    REGISTRY
        .iter()
        .map(|(name, description)| CommandEntry {
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Update palette filtered list from query (fuzzy match on name + description).
pub fn update_palette_filter(palette: &mut CommandPaletteState) {
    let query = palette.query.trim().to_lowercase();
    if query.is_empty() {
        palette.filtered = (0..palette.commands.len()).collect();
    } else {
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize)> = palette
            .commands
            .iter()
            .enumerate()
            .filter_map(|(i, c)| {
                let name_score = matcher.fuzzy_match(&c.name.to_lowercase(), &query);
                let desc_score = matcher.fuzzy_match(&c.description.to_lowercase(), &query);
                name_score.or(desc_score).map(|s| (s, i))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        palette.filtered = scored.into_iter().map(|(_, i)| i).collect();
    }
    palette.selected_index = 0;
}
