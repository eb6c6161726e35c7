use crate::config::RenderOptions;
use crate::models::Symbol;

/// Render a symbol as text: one glyph pair per module, a light quiet zone on
/// every side, each row ending in `\n`.
pub fn to_terminal_string(symbol: &Symbol, options: &RenderOptions) -> String {
    let quiet = options.quiet_zone;
    let size = symbol.size();
    let total = size + 2 * quiet;
    let glyph_len = options.dark.len().max(options.light.len());
    let mut out = String::with_capacity(total * (total * glyph_len + 1));

    for y in 0..total {
        for x in 0..total {
            let inside = (quiet..quiet + size).contains(&x) && (quiet..quiet + size).contains(&y);
            let dark = inside && symbol.is_dark(x - quiet, y - quiet);
            out.push_str(if dark { &options.dark } else { &options.light });
        }
        out.push('\n');
    }

    out
}

/// Print a symbol to stdout with default options
pub fn print_to_terminal(symbol: &Symbol) {
    print!("{}", to_terminal_string(symbol, &RenderOptions::default()));
}
