use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use cli::Dispatcher;
use lot::Lot;

fn main() {
    tracing_subscriber::fmt::init();

    let mut lot = Lot::default();
    lot.add_spots(3, 10, 5, 100);
    let mut dispatcher = Dispatcher::new(lot);

    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => run(&mut dispatcher, io::stdin().lock(), true),
        2 => match File::open(&args[1]) {
            Ok(file) => run(&mut dispatcher, BufReader::new(file), false),
            Err(err) => eprintln!("cannot open {}: {}", args[1], err),
        },
        _ => eprintln!(
            "Wrong number of arguments.\nUsage:\n  parking_lot <command-file> OR\n  parking_lot"
        ),
    }
}

fn run(dispatcher: &mut Dispatcher, input: impl BufRead, interactive: bool) {
    if interactive {
        prompt();
    }
    for line in input.lines() {
        let Ok(line) = line else {
            break;
        };
        match dispatcher.execute(&line) {
            Ok(reply) if !reply.is_empty() => println!("{}", reply),
            Ok(_) => {}
            Err(err) => println!("error: {}", err),
        }
        if interactive {
            prompt();
        }
    }
}

fn prompt() {
    print!("Enter command: ");
    let _ = io::stdout().flush();
}
