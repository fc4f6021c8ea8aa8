use clap::Parser;
use std::fs;
use std::io::{self, Read};

use crate::error::AppError;
use crate::models::{Conditions, ConversionOutput, ConversionRequest, Quantity, Sample};
use crate::oxygen::{DEFAULT_P_ATM, DEFAULT_P_DBAR};

#[derive(Parser, Debug)]
#[command(author, version, about = "Dissolved oxygen converter (SCOR WG 142) — optional JSON output", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(
        long,
        value_name = "QUANTITY",
        value_parser = parse_quantity,
        help = "Quantity of --value: conc (umol/L), pres (mbar) or sat (%)"
    )]
    from: Option<Quantity>,
    #[arg(long, value_name = "QUANTITY", value_parser = parse_quantity)]
    to: Option<Quantity>,
    #[arg(
        long,
        value_name = "VALUE",
        value_delimiter = ',',
        allow_negative_numbers = true,
        help = "One or more readings, comma separated"
    )]
    value: Vec<f64>,
    #[arg(short = 't', long = "temp", value_name = "DEG_C", allow_negative_numbers = true)]
    temp: Option<f64>,
    #[arg(short = 's', long = "salinity", value_name = "PSS78")]
    salinity: Option<f64>,
    #[arg(short = 'p', long = "pressure", value_name = "DBAR", default_value_t = DEFAULT_P_DBAR)]
    pressure: f64,
    #[arg(long = "p-atm", value_name = "MBAR", default_value_t = DEFAULT_P_ATM)]
    p_atm: f64,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON request document (from, to, samples); '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON request document (overrides --input)"
    )]
    request_json: Option<String>,
}

fn parse_quantity(s: &str) -> Result<Quantity, String> {
    s.parse::<Quantity>().map_err(|e| e.to_string())
}

fn parse_cmd_input_doc(doc: &str) -> Result<ConversionRequest, AppError> {
    serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })
}

fn request_from_flags(args: &Args) -> Option<ConversionRequest> {
    let (from, to, t_c, s) = (args.from?, args.to?, args.temp?, args.salinity?);
    if args.value.is_empty() {
        return None;
    }
    let conditions = Conditions {
        t_c,
        s,
        p_dbar: args.pressure,
        p_atm: args.p_atm,
    };
    let samples = args
        .value
        .iter()
        .map(|&value| Sample { value, conditions })
        .collect();
    Some(ConversionRequest { from, to, samples })
}

pub fn parse_request(args: &Args) -> Result<ConversionRequest, AppError> {
    match (&args.request_json, &args.input) {
        (Some(doc), _) => {
            serde_json::from_str(doc).map_err(|source| AppError::ParseRequestJson { source })
        }
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_cmd_input_doc(&s)
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_cmd_input_doc(&s)
        }
        (None, None) => request_from_flags(args).ok_or(AppError::MissingInputData),
    }
}

pub fn print_output(out: &ConversionOutput, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        for v in &out.values {
            println!("{}: {:.6} {}", out.to, v, out.unit);
        }
    }

    Ok(())
}
