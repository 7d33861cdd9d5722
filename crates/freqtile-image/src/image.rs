use num_traits::NumCast;

use crate::error::ImageError;

/// Image size in pixels
///
/// # Examples
///
/// ```
/// use freqtile_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with interleaved pixel data.
///
/// The image is backed by a contiguous buffer with shape (H, W, C), where H
/// is the height of the image, W the width and C the number of channels.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS>
where
    T: Copy,
{
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image, interleaved row-major.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqtile_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32, 3>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0.0f32; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image filled with a constant value.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError> {
        let data = vec![val; size.width * size.height * CHANNELS];
        Self::new(size, data)
    }

    /// Returns the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Returns the number of rows (height) of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Returns the number of columns (width) of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Returns the number of channels of the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Returns the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the pixel data as a mutable flat slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the image and returns the underlying pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the sample at (row, col, channel), or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<&T> {
        if row >= self.size.height || col >= self.size.width || channel >= CHANNELS {
            return None;
        }
        self.data
            .get((row * self.size.width + col) * CHANNELS + channel)
    }

    /// Cast the pixel data to a different type.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::CastError`] if any sample cannot be represented
    /// in the target type.
    pub fn cast<U>(&self) -> Result<Image<U, CHANNELS>, ImageError>
    where
        U: Copy + NumCast,
        T: NumCast,
    {
        let data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(ImageError::CastError))
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, data)
    }
}

impl<T> Image<T, 3>
where
    T: Copy,
{
    /// Expand a single-channel image into a three-channel image by
    /// replicating the channel.
    ///
    /// Decoders hand grayscale inputs through this before filtering, which
    /// only operates on three-channel buffers.
    pub fn from_grayscale(gray: &Image<T, 1>) -> Result<Self, ImageError> {
        let mut data = Vec::with_capacity(gray.as_slice().len() * 3);
        for &px in gray.as_slice() {
            data.extend_from_slice(&[px, px, px]);
        }
        Self::new(gray.size(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::{Image, ImageSize};
    use crate::error::ImageError;

    #[test]
    fn image_size() {
        let size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(size.width, 10);
        assert_eq!(size.height, 20);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0.0; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn image_data_mismatch() {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0; 11],
        );
        assert!(image.is_err());
    }

    #[test]
    fn image_get() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 1, 2, 3],
        )?;
        assert_eq!(image.get(1, 0, 0), Some(&2));
        assert_eq!(image.get(2, 0, 0), None);

        Ok(())
    }

    #[test]
    fn image_cast() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0, 128],
        )?;
        let casted = image.cast::<f32>()?;
        assert_eq!(casted.as_slice(), &[0.0, 128.0]);

        Ok(())
    }

    #[test]
    fn from_grayscale() -> Result<(), ImageError> {
        let gray = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0.25, 0.75],
        )?;
        let rgb = Image::<f32, 3>::from_grayscale(&gray)?;
        assert_eq!(rgb.as_slice(), &[0.25, 0.25, 0.25, 0.75, 0.75, 0.75]);

        Ok(())
    }
}
