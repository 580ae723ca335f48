//! `lzgdec` - decode an LZG file to raw bytes or text.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use lzg::{Header, Method, decode};

#[derive(Parser)]
#[command(name = "lzgdec")]
#[command(author, version, about = "Decode LZG compressed files")]
#[command(long_about = "
Decodes a buffer produced by liblzg (copy or LZG1 method).

Examples:
  lzgdec data.lzg data.bin
  lzgdec data.lzg --text utf8
  lzgdec data.lzg --info
")]
struct Cli {
    /// LZG file to decode
    input: PathBuf,

    /// Output file (stdout if omitted)
    output: Option<PathBuf>,

    /// Emit the decoded data as text in the given interpretation
    #[arg(short, long, value_enum)]
    text: Option<TextMode>,

    /// Print the parsed header instead of decoding
    #[arg(short, long)]
    info: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum TextMode {
    /// One character per byte (ISO-8859-1)
    Latin1,
    /// Lenient 1/2/3-byte UTF-8, as historical LZG tools read it
    Utf8,
    /// Validated UTF-8; fails on malformed data
    Utf8Strict,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = std::fs::read(&cli.input)
        .with_context(|| format!("Unable to read \"{}\"", cli.input.display()))?;
    if input.is_empty() {
        bail!("Input file \"{}\" is empty", cli.input.display());
    }

    if cli.info {
        let header = Header::parse(&input)
            .with_context(|| format!("Bad header in \"{}\"", cli.input.display()))?;
        print_header(&header);
        return Ok(());
    }

    let decoded =
        decode(&input).with_context(|| format!("Bad input data in \"{}\"", cli.input.display()))?;
    eprintln!("Decoded {} bytes from \"{}\"", decoded.len(), cli.input.display());

    let bytes: Cow<'_, [u8]> = match cli.text {
        None => Cow::Borrowed(decoded.as_bytes()),
        Some(TextMode::Latin1) => Cow::Owned(decoded.to_latin1_text().into_owned().into_bytes()),
        Some(TextMode::Utf8) => Cow::Owned(decoded.to_utf8_text().into_bytes()),
        Some(TextMode::Utf8Strict) => Cow::Borrowed(
            decoded
                .to_utf8_text_strict()
                .context("Decoded data is not valid UTF-8")?
                .as_bytes(),
        ),
    };

    write_output(cli.output.as_deref(), &bytes)
}

fn print_header(header: &Header) {
    let method = match header.method {
        Method::Copy => "copy",
        Method::Lzg1 => "LZG1",
    };
    println!("Method:        {method}");
    println!("Decoded size:  {}", header.decoded_size);
    println!("Encoded size:  {}", header.encoded_size);
    println!("Checksum:      {:#010x}", header.checksum);
    if let Some(markers) = header.markers {
        println!("Markers:       {:02x?}", markers.to_bytes());
    }
    println!("Payload start: {}", header.payload_start);
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Unable to open \"{}\"", path.display()))?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(bytes)
                .and_then(|()| writer.flush())
                .with_context(|| format!("Error writing \"{}\"", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("Error writing to stdout")?;
            stdout.flush().context("Error writing to stdout")?;
        }
    }
    Ok(())
}
