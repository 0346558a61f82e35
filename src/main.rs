//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

mod cli;


use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use std::env;
use std::io::Write;
use std::process;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(rust_log)) => rust_log.as_str(),
        (loglevel, _) => match loglevel.unwrap_or("info") {
            "debug" => "debug,hyper=info,reqwest=info",
            loglevel => loglevel,
        },
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn run(args: &ArgMatches<'_>, command: fn(&ArgMatches<'_>) -> Result<(), String>) {
    init_logger(args);
    if let Err(err) = command(args) {
        error!("{}", err);
        println!("Error: {}", err);
        process::exit(1)
    }
}

fn maps(args: &ArgMatches<'_>) -> Result<(), String> {
    let config = cli::config_from_args(args)?;
    cli::output(args, &cli::maps(&config)?)
}

fn meta(args: &ArgMatches<'_>) -> Result<(), String> {
    let config = cli::config_from_args(args)?;
    let json = cli::meta(&config, args)?;
    cli::output(args, &format!("{}\n", json))
}

fn grid(args: &ArgMatches<'_>) -> Result<(), String> {
    let config = cli::config_from_args(args)?;
    let pos = cli::grid(&config, args)?;
    println!("{}", pos);
    Ok(())
}

fn render(args: &ArgMatches<'_>) -> Result<(), String> {
    let config = cli::config_from_args(args)?;
    cli::output(args, &cli::render(&config, args)?)
}

fn genconfig(_args: &ArgMatches<'_>) -> Result<(), String> {
    println!("{}", cli::gen_config());
    Ok(())
}

fn main() {
    dotenv().ok();
    let mut app = App::new("grad_maps")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("Grid overlays and meta data of game world maps")
        .subcommand(SubCommand::with_name("maps")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --api=[URI] 'Maps API base URI'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --output=[FILE] 'Write to FILE instead of stdout'")
                        .about("List available maps"))
        .subcommand(SubCommand::with_name("meta")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --api=[URI] 'Maps API base URI'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --map=<NAME> 'World name'
                                              --output=[FILE] 'Write to FILE instead of stdout'")
                        .about("Show map meta data"))
        .subcommand(SubCommand::with_name("grid")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --api=[URI] 'Maps API base URI'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --map=[NAME] 'World name'
                                              --meta=[FILE] 'Read meta data from FILE instead of the API'
                                              --pos=<x,y> 'World position'
                                              --level=[INDEX] 'Grid level, 0 is the coarsest (Default: finest)'")
                        .about("Grid position of a world position"))
        .subcommand(SubCommand::with_name("render")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --api=[URI] 'Maps API base URI'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --map=[NAME] 'World name'
                                              --meta=[FILE] 'Read meta data from FILE instead of the API'
                                              --center=<x,y> 'World position of the map center'
                                              --zoom=<LEVEL> 'Map zoom level'
                                              --output=[FILE] 'Write SVG to FILE instead of stdout'")
                        .about("Render the grid overlay as SVG"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --api=[URI] 'Maps API base URI'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("maps", Some(sub_m)) => run(sub_m, maps),
            ("meta", Some(sub_m)) => run(sub_m, meta),
            ("grid", Some(sub_m)) => run(sub_m, grid),
            ("render", Some(sub_m)) => run(sub_m, render),
            ("genconfig", Some(sub_m)) => run(sub_m, genconfig),
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
