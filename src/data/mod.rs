/// Data layer: the sample table, its text loader and writer.
///
/// ```text
///  time phi
///  time phi      plain text, two columns
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → SampleTable
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ SampleTable  │  times: Vec<f64>, phi: Vec<f64>
///   └─────────────┘
/// ```
///
/// `writer` produces the same format, header line included.

pub mod loader;
pub mod model;
pub mod writer;
