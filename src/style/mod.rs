#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Size {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Size {
    pub const fn tip_font_size_px(self) -> f32 {
        match self {
            Size::Xs => 11.0,
            Size::Sm => 13.0,
            Size::Md => 14.0,
            Size::Lg => 16.0,
            Size::Xl => 18.0,
        }
    }

    pub const fn input_font_size_px(self) -> f32 {
        match self {
            Size::Xs => 12.0,
            Size::Sm => 14.0,
            Size::Md => 16.0,
            Size::Lg => 18.0,
            Size::Xl => 20.0,
        }
    }

    pub const fn height_px(self) -> f32 {
        match self {
            Size::Xs => 26.0,
            Size::Sm => 30.0,
            Size::Md => 36.0,
            Size::Lg => 42.0,
            Size::Xl => 50.0,
        }
    }

    pub const fn icon_px(self) -> f32 {
        match self {
            Size::Xs => 12.0,
            Size::Sm => 14.0,
            Size::Md => 16.0,
            Size::Lg => 18.0,
            Size::Xl => 20.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Radius {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Pill,
    Custom(f32),
}

impl Radius {
    pub fn px_for_height(self, height_px: f32) -> f32 {
        match self {
            Radius::Xs => 2.0,
            Radius::Sm => 4.0,
            Radius::Md => 8.0,
            Radius::Lg => 16.0,
            Radius::Xl => 32.0,
            Radius::Pill => height_px / 2.0,
            Radius::Custom(value) => value,
        }
    }
}
