use fieldfmt_api::stream::{MemorySink, VecSource, drive};
use fieldfmt_processor_string_format::StringFormatter;

use crate::config::{CheckArgs, FileConfig};
use crate::error::CliError;

/// Open a stream with no rows and print the output schema.
pub fn run(args: CheckArgs) -> Result<(), CliError> {
    let config = FileConfig::load(&args.config)?;
    let sink = MemorySink::new();
    let mut formatter = StringFormatter::from_values(&config.formatter_values()?, Box::new(sink.clone()))?;
    let mut source = VecSource::new(config.input_schema()?, Vec::new());
    drive(&mut source, &mut formatter)?;

    sink.inspect(|state| {
        for field in state.schema.iter().flat_map(|s| &s.fields) {
            match field.size {
                0 => println!("{}: {}", field.name, field.field_type),
                size => println!("{}: {}({size})", field.name, field.field_type),
            }
        }
    });
    println!("ok");
    Ok(())
}
