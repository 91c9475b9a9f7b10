//! Proxy: the image proxy defers the expensive disk load until the first
//! `display`, then reuses the loaded subject. Lazy initialization goes
//! through `OnceCell`, so the real image is built at most once.

use std::cell::OnceCell;

// ===== Subject contract =====

trait Image {
    fn display(&self);
}

// ===== Real subject =====

struct RealImage {
    filename: String,
}

impl RealImage {
    fn load(filename: &str) -> Self {
        println!("Loading image from disk: {filename}");
        Self {
            filename: filename.to_string(),
        }
    }
}

impl Image for RealImage {
    fn display(&self) {
        println!("Displaying image: {}", self.filename);
    }
}

// ===== Proxy =====

struct ImageProxy {
    filename: String,
    real_image: OnceCell<RealImage>,
}

impl ImageProxy {
    fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            real_image: OnceCell::new(),
        }
    }
}

impl Image for ImageProxy {
    fn display(&self) {
        let real = self
            .real_image
            .get_or_init(|| RealImage::load(&self.filename));
        real.display();
    }
}

fn main() {
    let image: Box<dyn Image> = Box::new(ImageProxy::new("cat_photo.jpg"));

    println!("Image created, not loaded yet...");

    println!("Calling display...");
    image.display(); // first call loads from disk

    println!("Calling display again...");
    image.display(); // already loaded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_image_is_built_lazily_and_once() {
        let proxy = ImageProxy::new("x.png");
        assert!(proxy.real_image.get().is_none());

        proxy.display();
        let first = proxy.real_image.get().unwrap() as *const RealImage;

        proxy.display();
        let second = proxy.real_image.get().unwrap() as *const RealImage;
        assert_eq!(first, second);
    }
}

// Expected output:
//
// Image created, not loaded yet...
// Calling display...
// Loading image from disk: cat_photo.jpg
// Displaying image: cat_photo.jpg
// Calling display again...
// Displaying image: cat_photo.jpg
