//! undermark CLI - render underscore-emphasis text to HTML

use std::io::{self, Read, Write};
use std::process;

use undermark::{CloseTagStyle, Options};

fn main() -> io::Result<()> {
    env_logger::init();

    let mut options = Options::default();
    let mut path: Option<String> = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "--slash-close" => options.close_tag = CloseTagStyle::Slash,
            "--escape-html" => options.escape_html = true,
            flag if flag.starts_with("--") => {
                eprintln!("unknown option: {flag}");
                print_usage();
                process::exit(2);
            }
            _ => {
                if path.is_none() {
                    path = Some(arg);
                } else {
                    eprintln!("unexpected argument: {arg}");
                    print_usage();
                    process::exit(2);
                }
            }
        }
    }

    // Read from the named file, or stdin when absent or "-"
    let input = match path.as_deref() {
        Some(path) if path != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    log::debug!("rendering {} bytes with {:?}", input.len(), options);
    let html = undermark::to_html_with_options(&input, &options);
    io::stdout().write_all(html.as_bytes())?;

    Ok(())
}

fn print_usage() {
    eprintln!("usage: undermark [--slash-close] [--escape-html] [FILE|-]");
}
