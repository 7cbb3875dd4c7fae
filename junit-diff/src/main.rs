// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::process::exit;

use junit_diff::commands::{app, with_default_subcommand};
use junit_diff::utils::get_diff_commands;
use junit_diff::utils::reader::{ReadBuffer, Reader};
use junit_diff::utils::writer::{WriteBuffer::Stderr, WriteBuffer::Stdout, Writer};

fn main() {
    let commands = get_diff_commands();

    let mappings = commands.iter().map(|s| (s.name(), s)).fold(
        HashMap::with_capacity(commands.len()),
        |mut map, entry| {
            map.insert(entry.0, entry.1.as_ref());
            map
        },
    );
    let names = mappings.keys().copied().collect::<Vec<&str>>();

    let mut app = app(&commands);
    let help = app.render_usage();
    let app = app.get_matches_from(with_default_subcommand(std::env::args().collect(), &names));

    match app.subcommand() {
        Some((name, value)) => {
            if let Some(command) = mappings.get(name) {
                let mut output_writer =
                    Writer::new(Stdout(std::io::stdout()), Stderr(std::io::stderr()));

                match (*command).execute(
                    value,
                    &mut output_writer,
                    &mut Reader::new(ReadBuffer::Stdin(std::io::stdin())),
                ) {
                    Err(e) => {
                        output_writer
                            .write_err(format!("Error occurred {e}"))
                            .expect("failed to write to stderr");

                        exit(-1);
                    }
                    Ok(code) => exit(code),
                }
            } else {
                println!("{help}");
            }
        }
        None => {
            println!("{help}");
        }
    }
}
