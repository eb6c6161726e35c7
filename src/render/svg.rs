use std::fmt::Write;

use crate::models::Symbol;

/// SVG document with one unit square per dark module and a `quiet_zone` border
pub fn to_svg_string(symbol: &Symbol, quiet_zone: usize) -> String {
    let dimension = symbol.size() + 2 * quiet_zone;
    let mut out = String::new();
    out += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {0} {0}\" stroke=\"none\">",
        dimension
    );
    out += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    out += "\t<path d=\"";
    let mut first = true;
    for y in 0..symbol.size() {
        for x in 0..symbol.size() {
            if symbol.is_dark(x, y) {
                if !first {
                    out.push(' ');
                }
                first = false;
                let _ = write!(out, "M{},{}h1v1h-1z", x + quiet_zone, y + quiet_zone);
            }
        }
    }
    out += "\" fill=\"#000000\"/>\n";
    out += "</svg>\n";
    out
}
