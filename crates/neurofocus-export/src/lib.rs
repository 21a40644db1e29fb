//! neurofocus-export
//!
//! Report assembly and rendering: diagnosis + transcript → `ReportDocument`
//! → Markdown, DOCX or PDF bytes.

pub mod assemble;
pub mod docx;
pub mod error;
pub mod pdf;
pub mod render;
pub mod renderer;
pub mod styles;
