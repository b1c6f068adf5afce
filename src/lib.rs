//! Filter-and-aggregate core for a data-science job salary dashboard.
//!
//! The crate loads a tabular salary dataset once, applies caller-selected
//! equality filters, and computes the summary views a dashboard renders:
//! remote-work distribution, top job titles by company size, and per-country
//! job counts with mean salaries. Rendering is left entirely to the caller;
//! every result is plain structured data.

pub mod data;
