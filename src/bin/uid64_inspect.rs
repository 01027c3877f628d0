// UID64 inspector - decode identifiers given as arguments and print their fields

use serde::Serialize;
use uid64::{infrastructure::initialize_tracing, PackedFields, Uid64};

#[derive(Debug, Serialize)]
struct Inspection {
    input: String,
    value: i64,
    bytes: String,
    fields: Option<PackedFields>,
}

fn inspect(input: &str) -> Inspection {
    let id = Uid64::load_from_string(input.trim());
    let bytes = id
        .to_bytes()
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ");
    let fields = Some(id.unpack()).filter(|fields| !id.is_empty() && fields.has_valid_marker());

    Inspection {
        input: input.to_string(),
        value: id.value(),
        bytes,
        fields,
    }
}

fn main() -> anyhow::Result<()> {
    initialize_tracing("warn")?;

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        eprintln!("usage: uid64_inspect <HEX16>...");
        std::process::exit(2);
    }

    let report: Vec<Inspection> = inputs.iter().map(|input| inspect(input)).collect();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
