// Print a symbol for an address to the terminal
//
// Usage: print_symbol [payload]
// Set QR_DEBUG=1 to trace version, level and mask selection.
use rust_qr_gen::RenderOptions;
use rust_qr_gen::render::terminal::to_terminal_string;

fn main() {
    let payload = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    match rust_qr_gen::encode(&payload) {
        Ok(symbol) => {
            print!("{}", to_terminal_string(&symbol, &RenderOptions::default()));
            println!(
                "{} -> version={} level={} mask={} size={}",
                payload,
                symbol.version(),
                symbol.error_level(),
                symbol.mask().index(),
                symbol.size()
            );
        }
        Err(err) => {
            eprintln!("Failed to encode {:?}: {}", payload, err);
            std::process::exit(1);
        }
    }
}
