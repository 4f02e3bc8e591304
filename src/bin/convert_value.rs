use std::io::{BufReader, Read};

use clap::{Parser, ValueEnum};
use log::{debug, error, info};
use tagged_points::formats::{self, Document};

#[derive(ValueEnum, Debug, Copy, Clone, Default)]
pub enum Format {
    #[default]
    Json,

    #[cfg(feature = "message-pack")]
    MessagePack,
}
impl Format {
    pub fn read(&self, reader: impl Read) -> tagged_points::Result<Document> {
        match self {
            Format::Json => formats::json::read_document(reader),
            #[cfg(feature = "message-pack")]
            Format::MessagePack => formats::msgpack::read_document(reader),
        }
    }

    pub fn write(
        &self,
        writer: impl std::io::Write,
        data: &Document,
        pretty: bool,
    ) -> tagged_points::Result<()> {
        match self {
            Format::Json => formats::json::to_writer(writer, data, pretty),
            #[cfg(feature = "message-pack")]
            Format::MessagePack => formats::msgpack::to_writer(writer, data),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// File containing a single value or a list of values, stdin if omitted
    input: Option<String>,

    /// Data format of the input
    #[clap(value_enum, long, default_value_t = Default::default())]
    from: Format,

    /// Data format when writing to stdout
    #[clap(value_enum, long, default_value_t = Default::default())]
    to: Format,

    /// Indent json output
    #[clap(long)]
    pretty: bool,
}

fn main() -> Result<(), String> {
    env_logger::init();

    let Args {
        input,
        from,
        to,
        pretty,
    } = Args::parse();

    let result = if let Some(input) = input {
        let file = std::fs::File::open(&input).map_err(|err| format!("{input}: {err}"))?;
        from.read(BufReader::new(file))
    } else {
        from.read(std::io::stdin().lock())
    };
    let document = result.map_err(|err| {
        error!("Couldn't read input as {from:?}");
        err.to_string()
    })?;

    info!("Read {} value(s)", document.values().len());
    for value in document.values() {
        debug!("{} value with {} point(s)", value.tag(), value.len());
    }

    to.write(std::io::stdout(), &document, pretty)
        .map_err(|err| err.to_string())?;

    Ok(())
}
