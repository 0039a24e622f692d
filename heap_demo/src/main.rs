use std::{
    io::{BufReader, Write},
    process::ExitCode,
};

use heap_engine::Sortable;
use int_heap::IntHeap;
use read_script::{Command, read_script};

mod int_heap;
mod logger;
mod read_script;

fn main() -> ExitCode {
    logger::init();

    let commands = match read_script(&mut BufReader::new(std::io::stdin())) {
        Ok(commands) => commands,
        Err(error) => {
            log::error!("{}", error);
            return ExitCode::FAILURE;
        }
    };
    log::info!("{} commands", commands.len());

    let stdout = std::io::stdout();
    if let Err(error) = run(&commands, &mut stdout.lock()) {
        log::error!("failed to write output: {}", error);
        return ExitCode::FAILURE;
    }
    return ExitCode::SUCCESS;
}

/// Executes `commands` against a fresh store, writing every popped value to
/// `output` on its own line.
fn run(commands: &[Command], output: &mut impl Write) -> std::io::Result<()> {
    let mut heap = IntHeap::default();

    for command in commands.iter() {
        match command {
            Command::Init(values) => {
                heap = IntHeap::new(values.clone());
                heap_engine::init(&mut heap);
                log::debug!("init {:?}", heap.as_slice());
            }
            Command::Push(value) => {
                heap_engine::push(&mut heap, *value);
                log::debug!("push {} -> {:?}", value, heap.as_slice());
            }
            Command::Pop => match heap_engine::pop(&mut heap) {
                Ok(value) => writeln!(output, "{}", value)?,
                Err(error) => log::warn!("pop: {}", error),
            },
            Command::Drain => {
                log::debug!("drain {} values", heap.len());
                while let Ok(value) = heap_engine::pop(&mut heap) {
                    writeln!(output, "{}", value)?;
                }
            }
        }
        debug_assert!(heap_engine::is_heap(&heap), "{:?}", heap.as_slice());
    }

    output.flush()?;
    return Ok(());
}
