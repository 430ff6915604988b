mod drag_controller;
