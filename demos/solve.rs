use clap::Parser;

use queens_rs::board::Board;
use queens_rs::render::Glyphs;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of queens.
    #[arg(value_name = "INT", default_value = "8")]
    n: usize,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    log::info!("Solving {n}-queens on a {n}x{n} board", n = args.n);

    let mut board = Board::new(args.n);
    let solved = board.solve();

    log::info!("Done in {:.3} s", time_total.elapsed().as_secs_f64());

    if solved {
        print!("{}", board.to_text_with_glyphs(&Glyphs::from_env()));
    } else {
        println!("No solution");
    }

    std::process::exit(if solved { 0 } else { 1 });
}
