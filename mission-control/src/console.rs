//! Interactive line-oriented deployment console.

use std::io::{self, BufRead, Write};

use marsrover::DeploymentEngine;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matcher for one deployment line: coordinates and commands separated by
/// whitespace, nothing else on the line.
static DEPLOY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<coordinates>\S+)\s+(?P<commands>\S+)$").unwrap());

/// Run the console until stdin is exhausted.
///
/// One line per deployment, formatted `3,4,N f,f,r,f,f`. The engine, and
/// with it the occupancy grid, lives for the whole session.
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    run_with(&mut stdin.lock(), &mut DeploymentEngine::new())
}

fn run_with<B: BufRead>(input: &mut B, engine: &mut DeploymentEngine) -> io::Result<()> {
    println!("Deploy your rover:");
    let mut buf = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            println!();
            return Ok(());
        }
        let line = buf.trim();
        let Some(captures) = DEPLOY_LINE.captures(line) else {
            println!("Invalid params. Params must follow the format of: 3,4,N f,f,r,f,f");
            continue;
        };
        match engine.deploy(&captures["coordinates"], &captures["commands"]) {
            Ok(deployment) => {
                println!(
                    "Final Coordinate: {}, {}",
                    deployment.position.x, deployment.position.y
                );
                println!("Final Direction:  {}", deployment.facing);
            }
            Err(err) => println!("{}", err),
        }
    }
}
