use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use fieldfmt_api::stream::drive;
use fieldfmt_processor_string_format::StringFormatter;

use super::jsonl::{JsonLinesSink, JsonLinesSource};
use crate::config::{FileConfig, RunArgs};
use crate::error::CliError;

pub fn run(args: RunArgs) -> Result<(), CliError> {
    let config = FileConfig::load(&args.config)?;
    tracing::info!(config = %args.config, "loaded config");
    let values = config.formatter_values()?;
    let schema = config.input_schema()?;

    let (reader, total): (Box<dyn BufRead>, Option<u64>) = match &args.input {
        Some(path) => {
            let file = File::open(path)?;
            let total = file.metadata().ok().map(|m| m.len());
            (Box::new(BufReader::new(file)), total)
        }
        None => (Box::new(BufReader::new(io::stdin())), None),
    };
    let writer: Box<dyn Write + Send> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let mut formatter = StringFormatter::from_values(&values, Box::new(JsonLinesSink::new(writer)))?;
    let mut source = JsonLinesSource::new(schema, reader, total);
    let rows = drive(&mut source, &mut formatter)?;
    tracing::info!(rows, "run finished");
    Ok(())
}
