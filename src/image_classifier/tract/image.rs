use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

/// Resize preserving aspect ratio, centered on a black canvas when the
/// source is not square.
pub fn resize_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if image.width() != image.height() {
        let (w, h) = (image.width() as f32, image.height() as f32);
        let scale = (width as f32 / w).min(height as f32 / h);
        let new_w = (w * scale) as u32;
        let new_h = (h * scale) as u32;

        let scaled = image.resize(new_w, new_h, imageops::FilterType::Triangle);

        let padded = DynamicImage::new_rgb8(width, height);
        let x_offset = (width - new_w) / 2;
        let y_offset = (height - new_h) / 2;

        let scaled_rgb = scaled.to_rgb8();
        let mut padded_rgb = padded.to_rgb8();

        for y in 0..new_h.min(scaled_rgb.height()) {
            for x in 0..new_w.min(scaled_rgb.width()) {
                let pixel = scaled_rgb.get_pixel(x, y);
                padded_rgb.put_pixel(x + x_offset, y + y_offset, *pixel);
            }
        }

        DynamicImage::from(padded_rgb)
    } else {
        image.resize_exact(width, height, imageops::FilterType::Triangle)
    }
}

fn image_to_tensor(
    image: &DynamicImage,
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let rgb = image.to_rgb8();
    let mut tensor = Tensor::zero::<f32>(&[1, 3, rgb.height() as usize, rgb.width() as usize])?;

    for c in 0..3 {
        for y in 0..rgb.height() {
            for x in 0..rgb.width() {
                let pixel = rgb.get_pixel(x, y);
                let index = c * (rgb.height() * rgb.width()) as usize
                    + y as usize * rgb.width() as usize
                    + x as usize;
                tensor.as_slice_mut::<f32>()?[index] = pixel[c] as f32 / 255.0;
            }
        }
    }

    Ok(tensor)
}

/// NCHW float tensor in [0,1], resized to the model's input shape.
pub fn resize_image_to_tensor(
    image: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let resized = resize_image(image, width, height);
    let tensor = image_to_tensor(&resized)?;

    Ok(tensor)
}
