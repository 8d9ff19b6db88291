use crate::error::ClassifyError;
use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, ClassifyError> {
    image::load_from_memory(bytes).map_err(|e| ClassifyError::Preprocess(e.to_string()))
}

/// Nearest-neighbour resize to `size x size`, then NHWC `[1, size, size, 3]` with values in [0, 1].
/// The source image is left untouched.
pub fn normalize_image(image: &DynamicImage, size: u32) -> Result<Tensor, ClassifyError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ClassifyError::Preprocess(format!(
            "image has no pixels ({}x{})",
            image.width(),
            image.height()
        )));
    }
    if size == 0 {
        return Err(ClassifyError::Preprocess("target size must be positive".to_string()));
    }

    let rgb = image
        .resize_exact(size, size, imageops::FilterType::Nearest)
        .to_rgb8();

    let side = size as usize;
    let tensor = tract_ndarray::Array4::from_shape_fn((1, side, side, 3), |(_, y, x, c)| {
        rgb.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
    });

    Ok(tensor.into_tensor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        let mut img = ImageBuffer::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = Rgb(color);
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_shape_is_nhwc() {
        let tensor = normalize_image(&solid(100, 60, [255, 0, 0]), 224).unwrap();
        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);

        let slice = tensor.as_slice::<f32>().unwrap();
        assert_eq!(slice[0], 1.0);
        assert_eq!(slice[1], 0.0);
        assert_eq!(slice[2], 0.0);
    }

    #[test]
    fn test_normalization() {
        let tensor = normalize_image(&solid(10, 10, [128, 64, 0]), 224).unwrap();
        let slice = tensor.as_slice::<f32>().unwrap();

        assert!((slice[0] - 128.0 / 255.0).abs() < 0.0001);
        assert!((slice[1] - 64.0 / 255.0).abs() < 0.0001);
        assert!(slice.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_nearest_neighbour_keeps_hard_edges() {
        // Left half black, right half white: nearest sampling never blends.
        let mut img = ImageBuffer::new(4, 4);
        for (x, _, pixel) in img.enumerate_pixels_mut() {
            *pixel = if x < 2 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) };
        }
        let tensor = normalize_image(&DynamicImage::ImageRgb8(img), 8).unwrap();
        let slice = tensor.as_slice::<f32>().unwrap();

        assert!(slice.iter().all(|v| *v == 0.0 || *v == 1.0));
    }

    #[test]
    fn test_deterministic_and_source_untouched() {
        let image = solid(31, 17, [10, 200, 30]);
        let before = image.to_rgb8().into_raw();

        let first = normalize_image(&image, 224).unwrap();
        let second = normalize_image(&image, 224).unwrap();

        assert_eq!(first, second);
        assert_eq!(image.to_rgb8().into_raw(), before);
        assert_eq!((image.width(), image.height()), (31, 17));
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let result = normalize_image(&DynamicImage::new_rgb8(0, 0), 224);
        assert!(matches!(result, Err(ClassifyError::Preprocess(_))));
    }

    #[test]
    fn test_undecodable_bytes_are_rejected() {
        let result = decode_image(b"definitely not a png");
        assert!(matches!(result, Err(ClassifyError::Preprocess(_))));
    }
}
