use image::error::ImageError;

use quadtree_split::{convert, Builder, Homogeneity, Raster};

use std::hash::Hash;
use std::path::Path;

/// Helper function for `main`.
fn error_exit(msg: &str, code: i32) -> ! {
	eprintln!("{}", msg);
	std::process::exit(code)
}

/// Parses an optional numeric flag, exiting with status 2 if it isn't a number.
fn parse_flag<T: std::str::FromStr>(matches: &clap::ArgMatches, name: &str) -> Option<T> {
	matches.value_of(name).map(|v| match v.parse() {
		Ok(n) => n,
		Err(_) => error_exit(&format!("Non-numeric value for {}", name), 2)
	})
}

/// Builds the tree once, then writes one rendering per layer plus the full
/// reconstruction.
fn split_and_save<P>(source: &Raster<P>, builder: &Builder, layers: u32, prefix: &str)
where
	P: image::Pixel<Subpixel = u8> + Eq + Hash + 'static
{
	let tree = match builder.build(source) {
		Ok(t) => t,
		Err(e) => error_exit(&e.to_string(), 4)
	};
	log::info!(
		"{} nodes, {} leaves, depth {}",
		tree.node_count(),
		tree.leaf_count(),
		tree.depth()
	);
	let save = |img: Raster<P>, suffix: &str| {
		let path = format!("{}_{}.png", prefix, suffix);
		match img.save(&path) {
			Ok(_) => log::info!("wrote {}", path),
			Err(_) => error_exit(&format!("Could not save {}", path), 3)
		}
	};
	for layer in 1..=layers {
		save(tree.render(Some(layer)), &format!("layer{}", layer));
	}
	save(tree.render(None), "quadtree");
}

/// `clap`-based CLI for splitting images into quadtrees.
///
/// May exit process with status code if there are errors:
///
/// 1: `clap` error
///
/// 2: invalid arguments
///
/// 3: file I/O issues
///
/// 4: invalid image data
///
/// 10: other, potentially unknown error
fn main() {
	let clap_matches = clap::App::new("quadtree_split")
		.version("0.1.0")
		.author("vkcz")
		.about("Splits an image into a quadtree of uniform regions and renders it layer by layer.")
		.arg_from_usage("-d, --depth=[N] 'Maximum split depth; defaults to 8'")
		.arg_from_usage("-l, --layers=[N] 'Render approximations for layers 1 through N; defaults to the split depth'")
		.arg_from_usage("-t, --threshold=[N] 'Binarize the image with this gray threshold before splitting'")
		.arg_from_usage("--tolerance=[N] 'Per-channel difference still counted as the same color; defaults to 0'")
		.arg_from_usage("-v, --verbose 'Log debug output'")
		.arg_from_usage("--log=[SPEC] 'Log specification, e.g. \"quadtree_split=trace\"; overrides --verbose'")
		.arg_from_usage("<INPUT> 'Path to input image'")
		.arg_from_usage("[OUTPUT] 'Prefix for output files; defaults to INPUT without its extension'")
		.get_matches();

	let log_spec = clap_matches.value_of("log")
		.unwrap_or(if clap_matches.is_present("verbose") { "debug" } else { "info" });
	let _logger = match flexi_logger::Logger::try_with_str(log_spec).and_then(|l| l.log_to_stderr().start()) {
		Ok(handle) => handle,
		Err(e) => error_exit(&format!("Could not start logger: {}", e), 2)
	};

	let input_path = clap_matches.value_of("INPUT").unwrap();
	let prefix = clap_matches.value_of("OUTPUT")
		.map(str::to_string)
		.unwrap_or_else(|| Path::new(input_path).with_extension("").to_string_lossy().into_owned());
	let depth: u32 = parse_flag(&clap_matches, "depth").unwrap_or(8);
	let layers: u32 = parse_flag(&clap_matches, "layers").unwrap_or(depth);
	let threshold: Option<u8> = parse_flag(&clap_matches, "threshold");
	let builder = Builder::new(depth).with_homogeneity(
		match parse_flag::<u8>(&clap_matches, "tolerance") {
			None | Some(0) => Homogeneity::Exact,
			Some(t) => Homogeneity::Tolerance(t),
		}
	);

	let source = match image::open(input_path) {
		Ok(i) => i,
		Err(e) => {
			let (msg, code) = match e {
				ImageError::Decoding(_) | ImageError::Unsupported(_) => ("Invalid image data", 4),
				ImageError::IoError(_) => ("File not found or could not be read", 3),
				_ => ("An error occurred", 10)
			};
			error_exit(msg, code)
		}
	}.into_rgb8();
	log::info!("{}: {}x{}", input_path, source.width(), source.height());

	match threshold {
		Some(t) => {
			let binary = convert::binarize(&source, t);
			let path = format!("{}_binary.png", prefix);
			if binary.save(&path).is_err() {
				error_exit(&format!("Could not save {}", path), 3)
			}
			split_and_save(&binary, &builder, layers, &prefix);
		},
		None => split_and_save(&source, &builder, layers, &prefix)
	}
}
