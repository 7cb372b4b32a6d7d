use plotters::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
pub mod error;
pub mod plot;

pub use error::CaptureError;

pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

/// Reference voltage of the capture ADC.
pub const ADC_VREF: f64 = 3.3;
/// Full-scale count of the capture ADC.
pub const ADC_FULL_SCALE: f64 = 4095.;

pub const FIELD_SEPARATOR: char = ';';

const SERIES_COLORS: [RGBColor; 6] = [BLUE, RED, GREEN, CYAN, MAGENTA, YELLOW];

/// The main struct for the multichannel analog capture.
/// Each channel holds one value per sample; all channels have the same length.
#[derive(Debug, Clone)]
pub struct AnalogCapture {
    pub channels: Vec<Vec<f64>>,
}

impl AnalogCapture {
    /// Init an AnalogCapture from a delimited txt capture,
    /// one sample per line, channels separated by `;`.
    /// The first line fixes the number of channels;
    /// blank lines are skipped, everything else has to parse.
    pub fn from_txt(fin: &Path) -> Result<AnalogCapture, CaptureError> {
        let file = File::open(fin).map_err(|e| CaptureError::FileAccess {
            path: fin.to_path_buf(),
            source: e,
        })?;
        let buf = BufReader::new(file);
        let mut capture = AnalogCapture {
            channels: Vec::new(),
        };
        for (lineno, l) in buf.lines().enumerate() {
            let l = l.map_err(|e| CaptureError::FileAccess {
                path: fin.to_path_buf(),
                source: e,
            })?;
            let record = l.trim();
            if record.is_empty() {
                continue;
            }
            let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
            if capture.channels.is_empty() {
                capture.channels = (0..fields.len())
                    .map(|_| Vec::with_capacity(10000))
                    .collect();
            } else if fields.len() != capture.channels.len() {
                return Err(CaptureError::RaggedRow {
                    line: lineno + 1,
                    expected: capture.channels.len(),
                    found: fields.len(),
                });
            }
            for (i, field) in fields.iter().enumerate() {
                let field = field.trim();
                let value = field.parse::<f64>().map_err(|_| CaptureError::InvalidField {
                    line: lineno + 1,
                    field: i + 1,
                    value: field.to_string(),
                })?;
                capture.channels[i].push(value);
            }
        }
        if capture.nrows() == 0 {
            return Err(CaptureError::EmptyCapture {
                path: fin.to_path_buf(),
            });
        }
        Ok(capture)
    }

    /// number of samples per channel
    pub fn nrows(&self) -> usize {
        match self.channels.first() {
            Some(c) => c.len(),
            None => 0,
        }
    }

    /// number of channels, a single-column capture counts as one channel
    pub fn nchannels(&self) -> usize {
        self.channels.len()
    }

    /// Synthetic acquisition time, one millisecond per sample.
    /// Derived from the row count, not read from the capture.
    pub fn time_ms(&self) -> Vec<u64> {
        (0..self.nrows() as u64).collect()
    }

    /// converts the raw ADC counts to volts in-place
    pub fn counts_to_volts(&mut self) {
        for channel in self.channels.iter_mut() {
            for v in channel.iter_mut() {
                *v = *v * ADC_VREF / ADC_FULL_SCALE;
            }
        }
    }

    /// plots all the channels against the sample time to svg
    pub fn plot_channels(&self, fout: &Path, ylabel: &str) -> Result<(), CaptureError> {
        if self.nrows() == 0 {
            return Err(CaptureError::Plot("capture has no samples".to_string()));
        }
        let time = self.time_ms();
        let xmax = (self.nrows() - 1) as f64;
        let xmargin = if xmax == 0. { 1. } else { xmax / 20. };
        let (xmin, xmax) = (-xmargin, xmax + xmargin);
        let mut ymin = f64::INFINITY;
        let mut ymax = f64::NEG_INFINITY;
        for channel in self.channels.iter() {
            let (cmin, cmax) = min_and_max(&channel[..]);
            if cmin < ymin {
                ymin = cmin
            }
            if cmax > ymax {
                ymax = cmax
            }
        }
        let yspan = if ymax == ymin { 1. } else { (ymax - ymin) / 10f64 };
        let ymin = ymin - yspan;
        let ymax = ymax + yspan;
        let root = SVGBackend::new(fout, (1200, 600)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption("Analog Data Visualization", ("sans-serif", 32))
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(xmin..xmax, ymin..ymax)?;
        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(150, 150, 150).stroke_width(1))
            .set_all_tick_mark_size(2)
            .label_style(("sans-serif", 20))
            .x_desc("Time (ms)")
            .y_desc(ylabel)
            .draw()?;

        for (i, channel) in self.channels.iter().enumerate() {
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            let line = LineSeries::new(
                time.iter().zip(channel.iter()).map(|(&t, &v)| (t as f64, v)),
                color.stroke_width(2),
            );
            chart
                .draw_series(line)?
                .label(channel_label(i))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
            let points = time
                .iter()
                .zip(channel.iter())
                .map(|(&t, &v)| Circle::new((t as f64, v), 3, color.filled()));
            chart.draw_series(points)?;
        }
        chart
            .configure_series_labels()
            .border_style(&BLACK.mix(0.5))
            .background_style(&WHITE.mix(0.8))
            .draw()?;
        Ok(())
    }
}

impl std::fmt::Display for AnalogCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "time_ms")?;
        for i in 0..self.nchannels() {
            write!(f, ",{}", channel_label(i))?;
        }
        write!(f, "\n")?;
        for t in 0..self.nrows() {
            write!(f, "{}", t)?;
            for channel in self.channels.iter() {
                write!(f, ",{}", channel[t])?;
            }
            write!(f, "\n")?;
        }
        Ok(())
    }
}

/// legend label for channel `i`, 1-based as on the capture device
pub fn channel_label(i: usize) -> String {
    format!("Channel {}", i + 1)
}

pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> (T, T) {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => panic!("could not iterate over slice"),
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    return (min, max);
}
