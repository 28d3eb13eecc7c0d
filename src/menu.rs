//! Menú de texto.
//!
//! Lee opciones línea a línea de cualquier `BufRead` y escribe en cualquier
//! `Write`, así el binario usa stdin/stdout y los tests un buffer. Fin de
//! entrada equivale a salir.
use std::io::{self, BufRead, Write};

use photo_core::Artifact;
use photo_gallery::{SortByDate, SortById, SortByRating};

use crate::App;

const MAIN_MENU: &str = "
--------------------- MAIN MENU ---------------------
 1. Capture Photo
 2. View Gallery
 3. Sort Gallery
 4. Codec Demo
 5. Decorator Demo
 6. View Statistics
 7. View Thumbnails
 0. Exit
-----------------------------------------------------";

pub struct Menu<'a, R, W> {
    app: &'a mut App,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(app: &'a mut App, input: R, out: W) -> Self { Self { app, input, out } }

    /// Bucle principal hasta `0` o fin de entrada.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "{MAIN_MENU}")?;
            let Some(choice) = self.prompt("Select option: ")? else { break };
            writeln!(self.out)?;
            match choice.as_str() {
                "1" => self.capture()?,
                "2" => self.view_gallery()?,
                "3" => self.sort_gallery()?,
                "4" => self.codec_demo()?,
                "5" => self.decorator_demo()?,
                "6" => self.view_statistics()?,
                "7" => self.view_thumbnails()?,
                "0" => break,
                _ => writeln!(self.out, "Invalid option. Please try again.")?,
            }
        }
        writeln!(self.out, "Goodbye!")
    }

    // None en fin de entrada.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn capture(&mut self) -> io::Result<()> {
        writeln!(self.out, "Capture Photo\n\nSelect photo type:\n1. Landscape\n2. Portrait")?;
        let kind = match self.prompt("Choice: ")?.as_deref() {
            Some("2") => "portrait",
            _ => "landscape",
        };
        writeln!(self.out, "\nSelect filters (comma-separated, or press Enter for none):\nAvailable: grayscale, sepia, blur")?;
        let filters = parse_filters(&self.prompt("Filters: ")?.unwrap_or_default());
        writeln!(self.out, "\nSelect format:\n1. JPEG\n2. PNG")?;
        let format = match self.prompt("Choice: ")?.as_deref() {
            Some("2") => "png",
            Some("1") => "jpeg",
            _ => "",
        };

        writeln!(self.out, "\nCreating {kind} photo, filters={filters:?}, format={format}...")?;
        match self.app.capture(kind, &filters, format) {
            Ok(captured) => {
                writeln!(self.out, "Photo created! Size: {} bytes", captured.encoded.len())?;
                writeln!(self.out, "   Image ID: {}", captured.artifact.id())?;
                writeln!(self.out, "   Total photos in gallery: {}", self.app.gallery().len())
            }
            Err(e) => writeln!(self.out, "Failed: {e}"),
        }
    }

    fn view_gallery(&mut self) -> io::Result<()> {
        let images = self.app.gallery().images();
        if images.is_empty() {
            return writeln!(self.out, "Gallery is empty. Capture some photos first!");
        }
        writeln!(self.out, "Total images: {}\n", images.len())?;
        for (i, img) in images.iter().enumerate() {
            let d = img.descriptor();
            writeln!(self.out, "[{}] ID: {}", i + 1, img.id())?;
            writeln!(self.out, "    Filters: {:?}", d.transforms)?;
            writeln!(self.out, "    Rating: {}", d.rating.value())?;
            writeln!(self.out, "    Format: {}", d.format)?;
            writeln!(self.out, "    Captured: {}", d.captured_at.format("%Y-%m-%d %H:%M:%S"))?;
            writeln!(self.out, "    Size: {} bytes\n", img.payload().len())?;
        }
        Ok(())
    }

    fn sort_gallery(&mut self) -> io::Result<()> {
        if self.app.gallery().is_empty() {
            return writeln!(self.out, "Gallery is empty. Nothing to sort!");
        }
        writeln!(self.out,
                 "Select sorting strategy:\n1. Date (Ascending)\n2. Date (Descending)\n3. Rating (Ascending)\n4. Rating (Descending)\n5. ID (Ascending)\n6. ID (Descending)")?;
        let name = match self.prompt("Choice: ")?.as_deref() {
            Some("1") => self.app.sort_gallery(SortByDate::new(true)),
            Some("2") => self.app.sort_gallery(SortByDate::new(false)),
            Some("3") => self.app.sort_gallery(SortByRating::new(true)),
            Some("4") => self.app.sort_gallery(SortByRating::new(false)),
            Some("5") => self.app.sort_gallery(SortById::new(true)),
            Some("6") => self.app.sort_gallery(SortById::new(false)),
            _ => return writeln!(self.out, "Invalid choice"),
        };
        writeln!(self.out, "Gallery sorted by: {name}")
    }

    fn codec_demo(&mut self) -> io::Result<()> {
        writeln!(self.out, "Codec Demo")?;
        match self.app.codec_demo() {
            Ok(reports) => {
                for r in reports {
                    writeln!(self.out,
                             "  {}: encoded {} bytes, decoded as {} (payload intact: {})",
                             r.format, r.encoded_len, r.decoded_id, r.payload_matches)?;
                }
                Ok(())
            }
            Err(e) => writeln!(self.out, "Failed: {e}"),
        }
    }

    fn decorator_demo(&mut self) -> io::Result<()> {
        writeln!(self.out, "Decorator Demo\n\nApplying chain: Grayscale -> Sepia -> Blur")?;
        match self.app.decorator_demo() {
            Ok(r) => {
                writeln!(self.out, "   Original filters: {:?}", r.original)?;
                writeln!(self.out, "   After decorators: {:?}", r.decorated)?;
                writeln!(self.out, "   Data size: {} bytes (unchanged)", r.payload_len)
            }
            Err(e) => writeln!(self.out, "Failed: {e}"),
        }
    }

    fn view_statistics(&mut self) -> io::Result<()> {
        write!(self.out, "{}", self.app.statistics().report())?;
        writeln!(self.out, "\nGallery size: {} images", self.app.gallery().len())?;
        writeln!(self.out, "Subscribers registered: {}", self.app.bus().subscriber_count())
    }

    fn view_thumbnails(&mut self) -> io::Result<()> {
        if self.app.gallery().is_empty() {
            return writeln!(self.out, "No thumbnails available. Capture some photos first!");
        }
        let thumbs = self.app.thumbnails();
        for (id, len) in &thumbs {
            writeln!(self.out, "  - {id}: {len} bytes")?;
        }
        writeln!(self.out, "\nTotal thumbnails: {}", thumbs.len())
    }
}

/// `"grayscale, sepia"` → `["grayscale", "sepia"]`; entradas vacías se descartan.
pub fn parse_filters(input: &str) -> Vec<String> {
    input.split(',').map(str::trim).filter(|f| !f.is_empty()).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_filters_trims_and_skips_empty() {
        assert_eq!(parse_filters(""), Vec::<String>::new());
        assert_eq!(parse_filters("grayscale, sepia ,,blur"), ["grayscale", "sepia", "blur"]);
    }
}
