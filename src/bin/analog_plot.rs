use analog_viz::plot::parse_cli;
use analog_viz::{channel_label, min_and_max, AnalogCapture};

fn main() {
    let (txtin, svgout, volts, verbose) = parse_cli();
    println!(
        "read data from {} and plot to {}",
        txtin.display(),
        svgout.display()
    );
    let mut capture = match AnalogCapture::from_txt(&txtin) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let ylabel = if volts {
        capture.counts_to_volts();
        "Voltage (V)"
    } else {
        "Analog Value"
    };
    println!(
        "loaded {} samples over {} channels",
        capture.nrows(),
        capture.nchannels()
    );
    for (i, channel) in capture.channels.iter().enumerate() {
        let (cmin, cmax) = min_and_max(&channel[..]);
        println!("{}: min {} max {}", channel_label(i), cmin, cmax);
    }
    if verbose {
        print!("{}", capture);
    }
    if let Err(e) = capture.plot_channels(&svgout, ylabel) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
