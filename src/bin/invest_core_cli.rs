use invest_core::{cli::run_cli, init};

fn main() {
    init();

    match run_cli() {
        Ok(report) => println!("{report}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
