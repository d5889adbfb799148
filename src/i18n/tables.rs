use super::Strings;

pub(super) static EN: Strings = Strings {
    app_name: "Maintenance & Monitoring",
    login_title: "Sign in or create an account",
    identifier: "Email or username",
    password: "Password",
    register: "Register",
    sign_in: "Sign in",
    logout: "Logout",
    action_menu: "Actions",
    add_user: "Add user",
    add_object: "Add object",
    add_equipment: "Add equipment",
    theme: "Theme",
    theme_light: "Light",
    theme_dark: "Dark",
    theme_system: "System",
    language: "Language",
    dashboard: "Dashboard",
    user_analytics: "Users overview",
    object_analytics: "Objects overview",
    equipment_analytics: "Equipment overview",
    map: "Map",
    open_drawer: "Toggle navigation",
    name: "Name",
    contact: "Contact",
    article: "Article",
    serial: "Serial",
    serial_placeholder: "Serial number",
    save: "Save",
    cancel: "Cancel",
    pick_on_map: "Pick coordinates on map",
    latitude: "Latitude",
    longitude: "Longitude",
    map_helper: "Click on the map or type coordinates to attach them to the record.",
    close: "Close",
    quick_stats: "Quick stats",
    navigate: "Navigate to section",
    info_blocks_hint: "Tap a block to jump to its screen.",
    objects: "Objects",
    equipment: "Equipment",
    users: "Users",
};

pub(super) static ES: Strings = Strings {
    app_name: "Mantenimiento y Monitoreo",
    login_title: "Inicia sesión o crea una cuenta",
    identifier: "Correo o usuario",
    password: "Contraseña",
    register: "Registrarse",
    sign_in: "Entrar",
    logout: "Salir",
    action_menu: "Acciones",
    add_user: "Añadir usuario",
    add_object: "Añadir objeto",
    add_equipment: "Añadir equipo",
    theme: "Tema",
    theme_light: "Claro",
    theme_dark: "Oscuro",
    theme_system: "Sistema",
    language: "Idioma",
    dashboard: "Panel",
    user_analytics: "Resumen de usuarios",
    object_analytics: "Resumen de objetos",
    equipment_analytics: "Resumen de equipos",
    map: "Mapa",
    open_drawer: "Alternar navegación",
    name: "Nombre",
    contact: "Contacto",
    article: "Artículo",
    serial: "Serie",
    serial_placeholder: "Número de serie",
    save: "Guardar",
    cancel: "Cancelar",
    pick_on_map: "Elegir coordenadas en el mapa",
    latitude: "Latitud",
    longitude: "Longitud",
    map_helper: "Haz clic en el mapa o escribe coordenadas para adjuntarlas al registro.",
    close: "Cerrar",
    quick_stats: "Estadísticas rápidas",
    navigate: "Ir a la sección",
    info_blocks_hint: "Toca un bloque para ir a su pantalla.",
    objects: "Objetos",
    equipment: "Equipos",
    users: "Usuarios",
};

pub(super) static RU: Strings = Strings {
    app_name: "Сервисный портал",
    login_title: "Вход или регистрация",
    identifier: "E-mail или логин",
    password: "Пароль",
    register: "Регистрация",
    sign_in: "Войти",
    logout: "Выйти",
    action_menu: "Действия",
    add_user: "Добавить пользователя",
    add_object: "Добавить объект",
    add_equipment: "Добавить оборудование",
    theme: "Тема",
    theme_light: "Светлая",
    theme_dark: "Тёмная",
    theme_system: "Системная",
    language: "Язык",
    dashboard: "Главная",
    user_analytics: "Пользователи",
    object_analytics: "Объекты",
    equipment_analytics: "Оборудование",
    map: "Карта",
    open_drawer: "Открыть меню",
    name: "Название",
    contact: "Контакт",
    article: "Артикул",
    serial: "Серийный номер",
    serial_placeholder: "Серийный номер",
    save: "Сохранить",
    cancel: "Отмена",
    pick_on_map: "Выбрать координаты на карте",
    latitude: "Широта",
    longitude: "Долгота",
    map_helper: "Нажмите на карту или введите координаты вручную.",
    close: "Закрыть",
    quick_stats: "Быстрая аналитика",
    navigate: "Перейти",
    info_blocks_hint: "Нажмите на блок, чтобы открыть экран.",
    objects: "Объекты",
    equipment: "Оборудование",
    users: "Пользователи",
};
