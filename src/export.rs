//! Theme snippets for the export panel.

use crate::palette::{ColorRole, Palette};

/// `tailwind.config.js` extending the theme colors.
pub fn tailwind_config(palette: &Palette) -> String {
    let mut out = String::from(
        "// tailwind.config.js\nmodule.exports = {\n  theme: {\n    extend: {\n      colors: {\n",
    );
    for role in ColorRole::ALL {
        out.push_str(&format!("        {}: '{}',\n", role.key(), palette.get(role)));
    }
    out.push_str("      }\n    }\n  }\n}");
    out
}

/// `:root` block of `--color-*` custom properties.
pub fn css_variables(palette: &Palette) -> String {
    let mut out = String::from(":root {\n");
    for role in ColorRole::ALL {
        out.push_str(&format!("  --color-{}: {};\n", role.key(), palette.get(role)));
    }
    out.push('}');
    out
}
