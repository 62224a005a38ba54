/// Cosmetic image pair shown on the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileImages {
    pub profile_image: &'static str,
    pub outline_image: &'static str,
}

const SHIRT: &str = "images/teniska.jfif";

impl ProfileImages {
    pub fn for_number(number: i32) -> Self {
        let outline_image = match number {
            7 | 9 => "images/bar1.jpg",
            10 => "images/man3.jpg",
            11 | 17 | 19 | 47 => "images/bayernStadium.jpg",
            _ => "images/bg35.png",
        };
        Self { profile_image: SHIRT, outline_image }
    }
}
