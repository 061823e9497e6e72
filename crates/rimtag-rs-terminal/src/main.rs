use rimtag_rs::load_order::*;
use rimtag_rs::{HostVersion, PackageId, WorkingSet};

fn main() {
	env_logger::init();

	let mut opts;

	/* Parse console input */
	let parsed_options = {
		let args: Vec<String> = std::env::args().collect();

		opts = getopts::Options::new();
		opts.optflag( "h", "help",         "Show help");
		opts.optopt(  "g", "game-version", "Game version to check packages against, read from the game directory when absent", "VERSION");
		opts.optflag( "",  "skip-deps",    "Sort even when dependencies are missing");
		opts.parsing_style(getopts::ParsingStyle::FloatingFrees);

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m)  => { m }
			Err(e) => { eprintln!("Unable to parse options: {}", e); std::process::exit(2) }
		};

		if parsed_options.opt_present("h") || parsed_options.free.is_empty() {
			eprintln!("{}", opts.usage(USAGE));
			return;
		}

		parsed_options
	};

	let host_version = match parsed_options.opt_str("g") {
		Some(v) => HostVersion::new(v),
		None => {
			let config = rimtag_rs::Config::load_from_disk().unwrap_or_else(|e| {
				log::warn!("Failed to read config file: {}", e);
				log::warn!("Using default config.");
				rimtag_rs::Config::default()
			});
			config.host_version()
		},
	};

	let res = match parsed_options.free[0].as_str() {
		"sort" => sort(&parsed_options.free[1..], host_version, parsed_options.opt_present("skip-deps")),
		"check" => check(&parsed_options.free[1..], host_version),
		"getdeps" => getdeps(&parsed_options.free[1..]),
		other => Err(Error::UnknownCommand(other.to_string())),
	};

	if let Err(e) = res {
		log::error!("{}", e);
		std::process::exit(1);
	}
}

const USAGE: &str = "Usage: rimtag-rs-terminal [options] <command> <working-set.json> [args]

Commands:
    sort <working-set.json>            Print the load order, one package per line
    check <working-set.json>           Check dependencies and supported versions
    getdeps <working-set.json> <id>    List packages depending on <id>";

fn load_working_set(args: &[String]) -> Result<WorkingSet, Error> {
	let path = args.first().ok_or(Error::MissingArgument("working set path"))?;
	Ok(WorkingSet::load_from_json(path)?)
}

fn sort(args: &[String], host_version: HostVersion, skip_deps: bool) -> Result<(), Error> {
	let ws = load_working_set(args)?;

	let mut builder = ResolverBuilder::new(&ws).host_version(host_version);
	if skip_deps {
		builder = builder.skip_dependency_check();
	}

	let order = builder.build().resolve()?;
	for package in order.packages() {
		println!("{}", package.identifier);
	}
	Ok(())
}

fn check(args: &[String], host_version: HostVersion) -> Result<(), Error> {
	let ws = load_working_set(args)?;
	let major = host_version.major().to_string();

	let report = ResolverBuilder::new(&ws)
		.host_version(host_version)
		.build()
		.validate()?;

	println!("{} packages checked, all dependencies present.", ws.len());
	if !report.incompatible.is_empty() {
		println!("{} packages do not declare support for {}.", report.incompatible.len(), major);
	}
	Ok(())
}

fn getdeps(args: &[String]) -> Result<(), Error> {
	let ws = load_working_set(args)?;
	let id = PackageId::new(args.get(1).ok_or(Error::MissingArgument("package id"))?);

	for dependent in find_dependents(&ws, &id) {
		match dependent.kind {
			DependentKind::Strict => println!("{} strict dependency", dependent.package),
			DependentKind::Alternative(group) => println!("{} depends but has alternative: {}", dependent.package, group),
		}
	}
	Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("rimtag-rs error: {0}")]
	RimtagError(#[from] rimtag_rs::Error),
	#[error("{0}")]
	Resolve(#[from] ResolveError),
	#[error("Missing argument: {0}")]
	MissingArgument(&'static str),
	#[error("Unknown command `{0}`")]
	UnknownCommand(String),
}
