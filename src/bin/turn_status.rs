use std::env;
use std::process;

use chess_rules::board::{Board, Color, Square};

fn usage() -> ! {
    eprintln!("usage: turn_status [--placement <fen-board>] <color> <from> <to> ...");
    eprintln!("example: turn_status white e2 e4 black e7 e5");
    process::exit(2);
}

fn parse_square(text: &str) -> Square {
    text.parse().unwrap_or_else(|err| {
        eprintln!("bad square '{text}': {err}");
        process::exit(2);
    })
}

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut board = if args.first().map(String::as_str) == Some("--placement") {
        if args.len() < 2 {
            usage();
        }
        let placement = args.remove(1);
        args.remove(0);
        Board::from_placement(&placement).unwrap_or_else(|err| {
            eprintln!("bad placement: {err}");
            process::exit(2);
        })
    } else {
        Board::new()
    };

    if args.len() % 3 != 0 {
        usage();
    }

    for turn in args.chunks(3) {
        let color: Color = turn[0].parse().unwrap_or_else(|err| {
            eprintln!("{err}");
            process::exit(2);
        });
        let from = parse_square(&turn[1]);
        let to = parse_square(&turn[2]);
        if let Err(err) = board.apply_turn(color, from, to) {
            println!("placement: {}", board.to_placement());
            eprintln!("{color} {from}-{to}: {err}");
            process::exit(1);
        }
    }

    let report = board.status();
    println!("placement: {}", board.to_placement());
    println!("status: {:?}", report.kind());
    println!(
        "color: {}",
        report.color().map_or_else(|| "none".to_string(), |c| c.to_string())
    );
    println!("victory: {}", report.victory());
    println!("reason: {report}");
}
