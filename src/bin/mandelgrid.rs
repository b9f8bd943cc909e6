extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelgrid;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelgrid::{dump_region, iterate_region_threaded, write_preview, GridError, Region};
use num::Complex;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

// Same limits, and same wording, as `Region::new`.
fn validate_size(s: &str) -> Result<(), String> {
    match parse_pair::<i64>(s, 'x') {
        None => Err("Could not parse grid resolution".to_string()),
        Some((im, jm)) => [(im, "horizontal"), (jm, "vertical")]
            .iter()
            .find(|&&(n, _)| n < 2)
            .map_or(Ok(()), |&(n, axis)| {
                Err(format!(
                    "invalid argument: the {} resolution must be at least 2 samples, got {}",
                    axis, n
                ))
            }),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const PREVIEW: &str = "preview";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandelgrid")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Samples the Mandelbrot set over a rectangle and dumps the escape-time grid")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Grid file to write"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("200x200")
                .validator(|s| validate_size(&s))
                .help("Samples per row and number of rows, as IMxJM"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.0,-2.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the sampled rectangle"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("2.0,2.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the sampled rectangle"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in solver"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("100")
                .validator(move |s| {
                    validate_range(
                        &s,
                        0,
                        10_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 0 and 10000000",
                    )
                })
                .help("Maximum number of iterations per point"),
        )
        .arg(
            Arg::with_name(PREVIEW)
                .required(false)
                .long(PREVIEW)
                .short("p")
                .takes_value(true)
                .help("Also write a grayscale PGM preview here"),
        )
        .get_matches()
}

struct Job {
    size: (i64, i64),
    leftlower: Complex<f64>,
    rightupper: Complex<f64>,
    iterations: i32,
    threads: usize,
}

// The validators have already vetted every value we read here.
fn job(matches: &ArgMatches) -> Option<Job> {
    Some(Job {
        size: parse_pair(matches.value_of(SIZE)?, 'x')?,
        leftlower: parse_complex(matches.value_of(LEFTLOWER)?)?,
        rightupper: parse_complex(matches.value_of(RIGHTUPPER)?)?,
        iterations: i32::from_str(matches.value_of(ITERATIONS)?).ok()?,
        threads: usize::from_str(matches.value_of(THREADS)?).ok()?,
    })
}

fn run(matches: &ArgMatches, job: &Job) -> Result<(), GridError> {
    let mut region = Region::new(job.leftlower, job.rightupper, job.size.0, job.size.1)?;
    iterate_region_threaded(&mut region, job.iterations, job.threads)?;
    if let Some(output) = matches.value_of(OUTPUT) {
        dump_region(&region, output)?;
    }
    if let Some(preview) = matches.value_of(PREVIEW) {
        write_preview(&region, preview)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();

    let job = match job(&matches) {
        Some(job) => job,
        None => {
            eprintln!("Could not read the command line arguments");
            std::process::exit(2);
        }
    };
    debug!(
        "{}x{} samples from {} to {}, depth {}, {} threads",
        job.size.0, job.size.1, job.leftlower, job.rightupper, job.iterations, job.threads
    );

    if let Err(e) = run(&matches, &job) {
        eprintln!("mandelgrid failed: {}", e);
        std::process::exit(1);
    }
}
