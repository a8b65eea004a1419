//! # pdf-invoice CLI
//!
//! Usage:
//!   pdf-invoice invoice.json -o invoice.pdf
//!   echo '{ ... }' | pdf-invoice -o invoice.pdf
//!   pdf-invoice --example > invoice.json

use clap::Parser;
use pdf_invoice::{InvoiceDocument, Locale};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pdf-invoice")]
#[command(about = "Render a JSON invoice to a multi-page PDF")]
struct Cli {
    /// Invoice JSON file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Where to write the PDF
    #[arg(short, long, default_value = "output.pdf")]
    output: PathBuf,

    /// Language of the built-in labels, overriding the document's style
    #[arg(long)]
    language: Option<String>,

    /// JSON file with a complete custom locale
    #[arg(long, value_name = "JSON")]
    translations: Option<PathBuf>,

    /// Print a sample invoice document and exit
    #[arg(long)]
    example: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if cli.example {
        print!("{}", example_invoice_json());
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(written) => {
            eprintln!("✓ Written {} bytes to {}", written, cli.output.display());
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("✗ {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<usize, String> {
    let input = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            buf
        }
    };

    let document = InvoiceDocument::from_json(&input).map_err(|e| e.to_string())?;

    let locale = match (&cli.translations, &cli.language) {
        (Some(path), _) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            Locale::from_json(&json).map_err(|e| e.to_string())?
        }
        (None, Some(language)) => Locale::for_language(language),
        (None, None) => Locale::for_language(&document.style.language),
    };

    let pdf = pdf_invoice::render(&document, &locale).map_err(|e| e.to_string())?;
    fs::write(&cli.output, &pdf)
        .map_err(|e| format!("Failed to write {}: {}", cli.output.display(), e))?;
    Ok(pdf.len())
}

fn example_invoice_json() -> &'static str {
    r##"{
  "metadata": {
    "title": "Invoice R-2024-017",
    "author": "Holzbau Berger GmbH"
  },
  "style": {
    "language": "de",
    "layout": "DIN_5008A",
    "showMarkerFolding": true,
    "showMarkerPuncher": true
  },
  "invoiceAddress": {
    "name": "Widget Industries",
    "street1": "Praterstraße 12",
    "zip": "1020",
    "city": "Wien",
    "country": "Austria",
    "vat": "ATU98765432"
  },
  "seller": {
    "address": {
      "name": "Holzbau Berger GmbH",
      "street1": "Hauptplatz 3",
      "zip": "8010",
      "city": "Graz"
    },
    "email": "office@holzbau-berger.at",
    "phone": "+43 316 123456",
    "vat": "ATU12345678",
    "corporateRegisterNumber": "FN 123456a"
  },
  "invoiceInformation": {
    "invoiceNumber": "R-2024-017",
    "invoiceDate": "2024-03-01",
    "dueDate": "2024-03-15",
    "customerIdentifier": "K-0042",
    "additionalInformation": [
      { "title": "Projekt", "value": "Dachstuhl Praterstraße" }
    ]
  },
  "customerAddress": {
    "name": "Hausverwaltung Novak",
    "street1": "Ringstraße 1",
    "zip": "1010",
    "city": "Wien"
  },
  "invoiceData": {
    "showAmountColumn": true,
    "showNetColumn": true,
    "showTaxColumn": true,
    "showGrossColumn": true,
    "showNetSum": true,
    "showTaxSum": true,
    "showGrossSum": true,
    "rows": [
      {
        "name": "Zimmererarbeiten",
        "description": "Abbund und Aufstellen des Dachstuhls, inklusive Kleinmaterial",
        "amount": 36,
        "amountUnit": "h",
        "net": 2520.0,
        "taxPercentage": 20,
        "tax": 504.0,
        "gross": 3024.0
      },
      {
        "name": "Konstruktionsvollholz",
        "description": "Fichte, technisch getrocknet",
        "amount": 4.25,
        "amountUnit": "m³",
        "net": 2210.0,
        "taxPercentage": 20,
        "tax": 442.0,
        "gross": 2652.0,
        "discountPercentage": 5
      },
      {
        "name": "Kranmiete",
        "net": 480.0,
        "taxPercentage": 20,
        "tax": 96.0,
        "gross": 576.0
      }
    ]
  },
  "invoiceDataSuffix": "Vielen Dank für Ihren Auftrag!",
  "bankPaymentData": {
    "accountHolder": "Holzbau Berger GmbH",
    "bankName": "Steiermärkische Sparkasse",
    "iban": "AT61 1904 3002 3457 3201",
    "bic": "STSPAT2GXXX",
    "paymentReference": "R-2024-017"
  }
}"##
}
