//! Raster export through `usvg`/`resvg`.

use log::{debug, info};
use tiny_skia::{Pixmap, Transform};

use super::Error;

/// Creates the `usvg` options used for rasterizing, with system fonts loaded.
///
/// Loading fonts is slow; callers that rasterize repeatedly should keep the
/// returned options around.
pub fn raster_options(font_family: &str) -> usvg::Options<'static> {
    info!(font_family; "Loading system fonts for rasterization");
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    options.font_family = font_family.to_string();
    options
}

/// Allocates a transparent pixmap.
pub fn new_pixmap(width: u32, height: u32) -> Result<Pixmap, Error> {
    Pixmap::new(width, height).ok_or(Error::PixmapAlloc { width, height })
}

/// Clears `pixmap` and renders `svg` onto it at 1:1 scale.
pub fn rasterize_into(
    svg: &str,
    options: &usvg::Options<'_>,
    pixmap: &mut Pixmap,
) -> Result<(), Error> {
    let tree =
        usvg::Tree::from_str(svg, options).map_err(|err| Error::SvgParse(err.to_string()))?;

    pixmap.fill(tiny_skia::Color::TRANSPARENT);
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    debug!(width = pixmap.width(), height = pixmap.height(); "SVG rasterized");
    Ok(())
}

/// Encodes the pixmap as PNG.
pub fn encode(pixmap: &Pixmap) -> Result<Vec<u8>, Error> {
    pixmap
        .encode_png()
        .map_err(|err| Error::PngEncode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_zero_size_pixmap_fails() {
        assert!(matches!(
            new_pixmap(0, 10),
            Err(Error::PixmapAlloc {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn test_invalid_svg_is_reported() {
        let options = usvg::Options::default();
        let mut pixmap = new_pixmap(4, 4).unwrap();
        let result = rasterize_into("<not-svg", &options, &mut pixmap);
        assert!(matches!(result, Err(Error::SvgParse(_))));
    }

    #[test]
    fn test_fill_rect_is_rasterized() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4" fill="#ff0000"/></svg>"##;
        let options = usvg::Options::default();
        let mut pixmap = new_pixmap(4, 4).unwrap();
        rasterize_into(svg, &options, &mut pixmap).unwrap();

        let pixel = pixmap.pixel(1, 1).unwrap();
        assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (255, 0, 0));

        let png = encode(&pixmap).unwrap();
        assert!(png.starts_with(PNG_SIGNATURE));
    }
}
