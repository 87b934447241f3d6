use crate::config::F;
use colorous::Gradient;
use ndarray::prelude::*;
use ndarray::Zip;
use plotters::coord::Shift;
use plotters::prelude::*;

const COLORBAR_WIDTH: u32 = 60;

fn filled_style<C: Into<RGBAColor>>(color: C) -> ShapeStyle {
    ShapeStyle {
        color: color.into(),
        filled: true,
        stroke_width: 0,
    }
}

/// Color scale shared by a heatmap and its colorbar.
pub struct Colorbar {
    pub min: F,
    pub max: F,
    pub gradient: Gradient,
    pub flipped: bool,
}

impl Colorbar {
    /// Scale from zero up to a maximum, for non-negative data.
    pub fn sequential(max: F, gradient: Gradient) -> Self {
        Self {
            min: 0.0,
            max,
            gradient,
            flipped: false,
        }
    }

    /// Scale symmetric around zero, for diverging data. The colorous
    /// diverging gradients run red to blue, so the scale is flipped to put
    /// positive values on the red end.
    pub fn symmetric(extremum: F, gradient: Gradient) -> Self {
        Self {
            min: -extremum,
            max: extremum,
            gradient,
            flipped: true,
        }
    }

    pub fn color(&self, value: F) -> RGBColor {
        let value = value.max(self.min).min(self.max);
        let mut t = (value - self.min) / (self.max - self.min);
        if self.flipped {
            t = 1.0 - t;
        }
        let (r, g, b) = self.gradient.eval_continuous(t).as_tuple();
        RGBColor(r, g, b)
    }

    fn draw<DB: DrawingBackend>(&self, text_color: RGBColor, mut chart_builder: ChartBuilder<DB>) {
        let &Self { min, max, .. } = self;
        let step = (max - min) / 256.0;
        let mut chart_context = chart_builder
            .margin_top(10)
            .x_label_area_size(30)
            .y_label_area_size(0)
            .right_y_label_area_size(45)
            .build_cartesian_2d(0.0..1.0, min..max)
            .unwrap()
            .set_secondary_coord(0.0..1.0, min..max);

        chart_context
            .configure_mesh()
            .set_all_tick_mark_size(0)
            .disable_x_axis()
            .disable_y_axis()
            .disable_x_mesh()
            .disable_y_mesh()
            .axis_style(&text_color)
            .label_style("sans-serif".into_font().color(&text_color))
            .draw()
            .unwrap();

        chart_context
            .configure_secondary_axes()
            .axis_style(&text_color)
            .label_style("sans-serif".into_font().color(&text_color))
            .draw()
            .unwrap();

        let plotting_area = chart_context.plotting_area();
        let values = Array1::range(min, max + step, step);
        for value in values {
            let color = self.color(value);
            let rectangle = Rectangle::new(
                [(0.0, value - step / 2.0), (1.0, value + step / 2.0)],
                filled_style(color),
            );
            plotting_area.draw(&rectangle).unwrap();
        }
    }
}

/// Draws a heatmap of a 2-D array onto the given area, over a unit-square
/// extent with row 0 at the top.
pub fn heatmap_on<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    function: ArrayView2<F>,
    colorbar: &Colorbar,
    title: &str,
) {
    let (rows, cols) = function.dim();
    let cell_h = 1.0 / rows as F;
    let cell_w = 1.0 / cols as F;

    let mut chart_context = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(25)
        .y_label_area_size(35)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)
        .unwrap();

    chart_context
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .set_all_tick_mark_size(5)
        .x_desc("x")
        .y_desc("y")
        .axis_style(&BLACK)
        .label_style("sans-serif".into_font().color(&BLACK))
        .draw()
        .unwrap();

    let plotting_area = chart_context.plotting_area();
    Zip::indexed(function).for_each(|(i, j), &value| {
        let x = j as F * cell_w;
        let y = 1.0 - (i + 1) as F * cell_h;
        let rectangle = Rectangle::new(
            [(x, y), (x + cell_w, y + cell_h)],
            filled_style(colorbar.color(value)),
        );
        plotting_area.draw(&rectangle).unwrap();
    });
}

/// Heatmap plus a colorbar strip on its right edge.
pub fn heatmap_with_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    function: ArrayView2<F>,
    colorbar: &Colorbar,
    title: &str,
) {
    let (width, _height) = area.dim_in_pixel();
    let (map_area, bar_area) = area.split_horizontally(width - COLORBAR_WIDTH);
    colorbar.draw(BLACK, ChartBuilder::on(&bar_area));
    heatmap_on(&map_area, function, colorbar, title);
}

#[test]
fn test_heatmap() {
    let function = Array2::from_shape_fn((64, 64), |(i, j)| {
        (-((i as F - 32.0).powi(2) + (j as F - 32.0).powi(2)) / 128.0).exp()
    });
    let path = std::env::temp_dir().join("qsviz_test_heatmap.png");

    let root = BitMapBackend::new(&path, (360, 300)).into_drawing_area();
    root.fill(&WHITE).unwrap();
    heatmap_with_colorbar(
        &root,
        function.view(),
        &Colorbar::sequential(1.0, colorous::INFERNO),
        "gaussian",
    );
    root.present().unwrap();

    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}
