use std::{fmt, rc::Rc};

/// Program family used to open a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    PhotoViewer,
    VideoPlayer,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Media {
    Photo {
        name: String,
        path: String,
        latitude: f64,
        longitude: f64,
    },
    Video {
        name: String,
        path: String,
        duration: u32,
    },
    /// A video split into chapters; never built with an empty chapter list.
    Film {
        name: String,
        path: String,
        duration: u32,
        chapters: Vec<u32>,
    },
}

impl Media {
    pub fn name(&self) -> &str {
        match self {
            Media::Photo { name, .. } | Media::Video { name, .. } | Media::Film { name, .. } => {
                name
            }
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Media::Photo { path, .. } | Media::Video { path, .. } | Media::Film { path, .. } => {
                path
            }
        }
    }

    pub fn player(&self) -> PlayerKind {
        match self {
            Media::Photo { .. } => PlayerKind::PhotoViewer,
            Media::Video { .. } | Media::Film { .. } => PlayerKind::VideoPlayer,
        }
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Media::Photo {
                name,
                path,
                latitude,
                longitude,
            } => writeln!(
                f,
                "Name: {name}, filepath: {path}, Latitude: {}, Longitude: {}",
                Coordinate(*latitude),
                Coordinate(*longitude)
            ),
            Media::Video {
                name,
                path,
                duration,
            } => writeln!(f, "Name: {name}, filepath: {path}, Duration: {duration}"),
            Media::Film { chapters, .. } => {
                for (index, chapter) in chapters.iter().enumerate() {
                    writeln!(
                        f,
                        "The duration for chapter {index} of the film is {chapter}"
                    )?;
                }
                Ok(())
            }
        }
    }
}

/// Renders a coordinate with six significant digits, switching to exponent
/// notation outside `1e-4..1e6`, with trailing zeros dropped.
struct Coordinate(f64);

const SIGNIFICANT_DIGITS: i32 = 6;

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }

        // Exponent after rounding, so 999999.5 counts as 1e6.
        let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        if (-4..SIGNIFICANT_DIGITS).contains(&exponent) {
            let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
            f.write_str(trim_fraction(&format!("{value:.decimals$}")))
        } else {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{sign}{:02}",
                trim_fraction(mantissa),
                exponent.unsigned_abs()
            )
        }
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Named list of media items. Members are shared with the catalog, so a
/// group keeps showing an item under the name it was added with.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    name: String,
    members: Vec<Rc<Media>>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn members(&self) -> &[Rc<Media>] {
        &self.members
    }

    pub fn push(&mut self, media: Rc<Media>) {
        self.members.push(media);
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Group Name: {}", self.name)?;
        for member in &self.members {
            write!(f, "{member}")?;
        }
        Ok(())
    }
}
