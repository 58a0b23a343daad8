use image::{Rgb, RgbImage};

/// Draw a straight line from `p0` to `p1` with the given pixel width.
///
/// Width 1 is a plain Bresenham line including both endpoints. Wider lines
/// are filled as a quad around the segment without end caps. The quad corners
/// are rounded to whole pixels: the `(w-1)/2` offset rounded half-down lies
/// along `(-dy, dx)`, the one rounded half-up on the opposite side.
pub fn stroke(img: &mut RgbImage, p0: (i32, i32), p1: (i32, i32), width: u32, color: Rgb<u8>) {
    if width <= 1 || p0 == p1 {
        bresenham(img, p0, p1, color);
        return;
    }

    let (x0, y0) = (p0.0 as i64, p0.1 as i64);
    let (x1, y1) = (p1.0 as i64, p1.1 as i64);
    let dx = (x1 - x0) as f64;
    let dy = (y1 - y0) as f64;
    let len = dx.hypot(dy);

    let half = (width - 1) as f64 / 2.0;
    let ratio_max = round_half_up(half) as f64 / len;
    let ratio_min = round_half_down(half) as f64 / len;

    let max_x = round_half_up(dx * ratio_max);
    let min_x = round_half_down(dx * ratio_min);
    let max_y = round_half_up(dy * ratio_max);
    let min_y = round_half_down(dy * ratio_min);

    let quad = [
        (x0 - min_y, y0 + min_x),
        (x1 - min_y, y1 + min_x),
        (x1 + max_y, y1 - max_x),
        (x0 + max_y, y0 - max_x),
    ];

    let left = quad.iter().map(|p| p.0).min().unwrap_or(0).max(0);
    let top = quad.iter().map(|p| p.1).min().unwrap_or(0).max(0);
    let right = quad.iter().map(|p| p.0).max().unwrap_or(-1).min(img.width() as i64 - 1);
    let bottom = quad.iter().map(|p| p.1).max().unwrap_or(-1).min(img.height() as i64 - 1);

    for y in top..=bottom {
        for x in left..=right {
            if point_in_quad(x, y, &quad) {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

// Round to nearest, ties away from zero.
fn round_half_up(f: f64) -> i64 {
    if f >= 0.0 { (f + 0.5).floor() as i64 } else { -((-f + 0.5).floor() as i64) }
}

// Round to nearest, ties toward zero.
fn round_half_down(f: f64) -> i64 {
    if f >= 0.0 { (f - 0.5).ceil() as i64 } else { -((-f - 0.5).ceil() as i64) }
}

fn bresenham(img: &mut RgbImage, p0: (i32, i32), p1: (i32, i32), color: Rgb<u8>) {
    let (mut x, mut y) = p0;
    let dx = (p1.0 - x).abs();
    let dy = -(p1.1 - y).abs();
    let sx = if x < p1.0 { 1 } else { -1 };
    let sy = if y < p1.1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        plot(img, x, y, color);
        if (x, y) == p1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[inline]
fn plot(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

#[inline]
fn cross(ax: i64, ay: i64, bx: i64, by: i64) -> i64 { ax * by - ay * bx }

// Pixels on an edge count as inside.
fn point_in_quad(px: i64, py: i64, quad: &[(i64, i64); 4]) -> bool {
    let mut has_neg = false;
    let mut has_pos = false;
    for i in 0..4 {
        let (ax, ay) = quad[i];
        let (bx, by) = quad[(i + 1) % 4];
        let c = cross(bx - ax, by - ay, px - ax, py - ay);
        has_neg |= c < 0;
        has_pos |= c > 0;
    }
    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb<u8> = Rgb([0, 0, 0]);
    const FG: Rgb<u8> = Rgb([255, 255, 255]);

    fn painted(img: &RgbImage) -> Vec<(u32, u32)> {
        img.enumerate_pixels()
            .filter(|(_, _, p)| **p == FG)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_thin_line_includes_endpoints() {
        let mut img = RgbImage::from_pixel(16, 16, BG);
        stroke(&mut img, (5, 8), (8, 14), 1, FG);
        assert_eq!(*img.get_pixel(5, 8), FG);
        assert_eq!(*img.get_pixel(8, 14), FG);
        // y-major line: one pixel per row
        assert_eq!(painted(&img).len(), 7);
    }

    fn rows_at(img: &RgbImage, x: u32) -> Vec<u32> {
        (0..img.height()).filter(|&y| *img.get_pixel(x, y) == FG).collect()
    }

    #[test]
    fn test_horizontal_wide_line_has_exact_rows() {
        let mut img = RgbImage::from_pixel(32, 32, BG);
        stroke(&mut img, (4, 16), (20, 16), 8, FG);
        assert_eq!(rows_at(&img, 10), (12..=19).collect::<Vec<u32>>());
        // no end caps
        assert_eq!(*img.get_pixel(3, 16), BG);
        assert_eq!(*img.get_pixel(21, 16), BG);

        let mut img = RgbImage::from_pixel(32, 32, BG);
        stroke(&mut img, (4, 16), (20, 16), 3, FG);
        assert_eq!(rows_at(&img, 10), vec![15, 16, 17]);
    }

    #[test]
    fn test_width_two_extends_toward_negative_normal() {
        // left to right: the extra row sits above the segment
        let mut img = RgbImage::from_pixel(16, 16, BG);
        stroke(&mut img, (2, 8), (12, 8), 2, FG);
        assert_eq!(rows_at(&img, 6), vec![7, 8]);

        // top to bottom: the extra column sits right of the segment
        let mut img = RgbImage::from_pixel(32, 32, BG);
        stroke(&mut img, (16, 4), (16, 20), 2, FG);
        let cols: Vec<u32> = (0..32).filter(|&x| *img.get_pixel(x, 10) == FG).collect();
        assert_eq!(cols, vec![16, 17]);
    }

    #[test]
    fn test_wide_diagonal_covers_segment() {
        let mut img = RgbImage::from_pixel(128, 128, BG);
        stroke(&mut img, (41, 64), (64, 112), 8, FG);
        assert_eq!(*img.get_pixel(41, 64), FG);
        assert_eq!(*img.get_pixel(52, 88), FG);
        assert_eq!(*img.get_pixel(63, 112), FG);
        // rounded corners leave the far endpoint just outside the quad
        assert_eq!(*img.get_pixel(64, 112), BG);
        assert_eq!(*img.get_pixel(0, 0), BG);
    }

    #[test]
    fn test_degenerate_segment_paints_one_pixel() {
        let mut img = RgbImage::from_pixel(8, 8, BG);
        stroke(&mut img, (3, 3), (3, 3), 4, FG);
        assert_eq!(painted(&img), vec![(3, 3)]);
    }

    #[test]
    fn test_clips_outside_canvas() {
        let mut img = RgbImage::from_pixel(8, 8, BG);
        stroke(&mut img, (-4, 4), (12, 4), 3, FG);
        stroke(&mut img, (-4, -4), (12, 12), 1, FG);
        assert_eq!(*img.get_pixel(0, 4), FG);
        assert_eq!(*img.get_pixel(7, 4), FG);
        assert_eq!(*img.get_pixel(7, 7), FG);
    }
}
