//! Navigation Role Gate
//!
//! Which pages a role may see. The allow-list is static; the API enforces
//! the real authorization.

use crate::domain::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Auth,
    Profile,
    Classes,
    Subjects,
    Rooms,
    Teachers,
    Students,
    Marks,
    Settings,
}

/// Header order
pub const ROUTES: [Route; 10] = [
    Route::Home,
    Route::Profile,
    Route::Auth,
    Route::Classes,
    Route::Subjects,
    Route::Rooms,
    Route::Teachers,
    Route::Students,
    Route::Marks,
    Route::Settings,
];

/// Homepage card order
const CARDS: [Route; 8] = [
    Route::Auth,
    Route::Classes,
    Route::Subjects,
    Route::Rooms,
    Route::Teachers,
    Route::Students,
    Route::Marks,
    Route::Settings,
];

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Auth => "/auth",
            Route::Profile => "/profile",
            Route::Classes => "/classes",
            Route::Subjects => "/subjects",
            Route::Rooms => "/rooms",
            Route::Teachers => "/teachers",
            Route::Students => "/students",
            Route::Marks => "/marks",
            Route::Settings => "/settings",
        }
    }

    /// Unknown paths land on the homepage
    pub fn from_path(path: &str) -> Route {
        let path = path.trim_start_matches('#');
        let path = path.trim_end_matches('/');
        ROUTES
            .iter()
            .copied()
            .find(|r| r.path().trim_end_matches('/') == path)
            .unwrap_or(Route::Home)
    }

    /// Header link text
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Главная",
            Route::Auth => "Авторизация",
            Route::Profile => "Профиль",
            Route::Classes => "Классы",
            Route::Subjects => "Предметы",
            Route::Rooms => "Кабинеты",
            Route::Teachers => "Учителя",
            Route::Students => "Ученики",
            Route::Marks => "Оценки",
            Route::Settings => "Настройки",
        }
    }

    /// Homepage card caption
    pub fn card_title(&self) -> &'static str {
        match self {
            Route::Classes => "Учебные классы",
            Route::Rooms => "Аудитории",
            Route::Students => "Студенты",
            other => other.title(),
        }
    }

    pub fn allows(&self, role: Option<&Role>) -> bool {
        use Role::*;
        match (self, role) {
            (Route::Home, _) => true,
            (Route::Auth, None) => true,
            (Route::Auth, Some(role)) => matches!(role, Admin | Principal | Teacher),
            (Route::Profile, role) => role.is_some(),
            (_, None) => false,
            (Route::Classes | Route::Settings, Some(role)) => matches!(role, Principal | Teacher),
            (
                Route::Subjects | Route::Rooms | Route::Teachers | Route::Students | Route::Marks,
                Some(role),
            ) => matches!(role, Admin | Principal | Teacher),
        }
    }
}

/// Header links visible to `role`
pub fn header_links(role: Option<&Role>) -> Vec<Route> {
    ROUTES.iter().copied().filter(|r| r.allows(role)).collect()
}

/// Homepage navigation cards visible to `role`
pub fn home_cards(role: Option<&Role>) -> Vec<Route> {
    CARDS.iter().copied().filter(|r| r.allows(role)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_sees_home_and_auth() {
        assert_eq!(header_links(None), vec![Route::Home, Route::Auth]);
        assert_eq!(home_cards(None), vec![Route::Auth]);
    }

    #[test]
    fn test_teacher_sees_everything() {
        let links = header_links(Some(&Role::Teacher));
        assert_eq!(links.len(), ROUTES.len());
        assert_eq!(home_cards(Some(&Role::Teacher)).len(), 8);
    }

    #[test]
    fn test_principal_sees_everything() {
        let principal = Some(&Role::Principal);
        assert_eq!(header_links(principal), ROUTES.to_vec());
        assert_eq!(home_cards(principal), CARDS.to_vec());
        assert!(Route::Classes.allows(principal));
        assert!(Route::Settings.allows(principal));
        assert!(Route::Auth.allows(principal));
    }

    #[test]
    fn test_admin_has_no_classes_or_settings() {
        let cards = home_cards(Some(&Role::Admin));
        assert!(!cards.contains(&Route::Classes));
        assert!(!cards.contains(&Route::Settings));
        assert!(cards.contains(&Route::Marks));
        assert!(cards.contains(&Route::Auth));
    }

    #[test]
    fn test_student_and_unknown_roles() {
        assert_eq!(header_links(Some(&Role::Student)), vec![Route::Home, Route::Profile]);
        let other = Role::Other("guest".to_string());
        assert!(home_cards(Some(&other)).is_empty());
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("#/marks"), Route::Marks);
        assert_eq!(Route::from_path("/rooms/"), Route::Rooms);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/nope"), Route::Home);
    }

    #[test]
    fn test_card_titles() {
        assert_eq!(Route::Students.card_title(), "Студенты");
        assert_eq!(Route::Students.title(), "Ученики");
        assert_eq!(Route::Marks.card_title(), "Оценки");
    }
}
