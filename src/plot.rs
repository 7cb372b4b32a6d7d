use super::VERSION;
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments that control the plotting of the analog capture.
pub fn parse_cli() -> (PathBuf, PathBuf, bool, bool) {
    let arg_txtin = Arg::with_name("input_txtfile")
        .help("name for the captured txt file")
        .short("f")
        .long("txtfile")
        .takes_value(true)
        .required(true)
        .default_value("capture.txt");
    let arg_svgout = Arg::with_name("output_svgfile")
        .help("name of the output svg file")
        .short("o")
        .long("svgfile")
        .takes_value(true);
    let arg_volts = Arg::with_name("volts")
        .help("convert the raw adc counts to volts")
        .long("volts")
        .takes_value(false);
    let arg_verbose = Arg::with_name("verbose")
        .help("print the loaded table")
        .short("v")
        .long("verbose")
        .takes_value(false);
    let cli_args = App::new("Analog_plot")
        .version(VERSION.unwrap_or("unknown"))
        .author("Luca Peruzzo")
        .about("cli app to plot the multichannel analog capture")
        .arg(arg_txtin)
        .arg(arg_svgout)
        .arg(arg_volts)
        .arg(arg_verbose)
        .get_matches();
    let txtin = PathBuf::from(cli_args.value_of("input_txtfile").unwrap_or_default());
    let svgout = match cli_args.value_of("output_svgfile") {
        Some(p) => PathBuf::from(p),
        None => {
            let mut svgout = txtin.clone();
            svgout.set_extension("svg");
            svgout
        }
    };
    let volts = cli_args.is_present("volts");
    let verbose = cli_args.is_present("verbose");
    return (txtin, svgout, volts, verbose);
}
