//! Binary entry point for the glyphcon demo host.

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--print-config") {
        let config = glyphcon::config::Config::default();
        match toml::to_string_pretty(&config) {
            Ok(s) => print!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("glyphcon {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("glyphcon {}", env!("CARGO_PKG_VERSION"));
        println!("A bitmap-font text console drawn with the GPU\n");
        println!("USAGE:");
        println!("    glyphcon [OPTIONS] < input.txt\n");
        println!("Lines read from stdin are written to the console. Type in the");
        println!("window and press Enter to write a line, Escape to clear.\n");
        println!("OPTIONS:");
        println!("    --print-config    Print the default configuration to stdout");
        println!("    --version, -V     Print version information");
        println!("    --help, -h        Print this help message\n");
        println!("ENVIRONMENT:");
        println!(
            "    {}      Log level (error, warn, info, debug, trace)",
            glyphcon::logging::LOG_ENV
        );
        return;
    }

    if let Err(e) = glyphcon::logging::init() {
        eprintln!("glyphcon: {e}");
    }

    if let Err(e) = glyphcon::app::App::run() {
        log::error!("{e}");
        log::logger().flush();
        eprintln!("glyphcon: {e}");
        std::process::exit(1);
    }
}
