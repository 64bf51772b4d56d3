// Server-rendered HTML pages for the hotel site.

use axum::response::Html;
use std::fmt::Write;

use crate::domain::catalog;
use crate::domain::entities::{Flash, Reservation, Room};

const SITE_NAME: &str = "Hotel Paraíso";

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

fn layout(title: &str, flashes: &[Flash], body: &str) -> Html<String> {
    let mut messages = String::new();
    for flash in flashes {
        let _ = write!(
            messages,
            r#"<div class="flash {}">{}</div>"#,
            flash.kind.css_class(),
            escape(&flash.message)
        );
    }

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {SITE_NAME}</title>
<link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
<header>
<a class="logo" href="/">{SITE_NAME}</a>
<nav>
<a href="/">Inicio</a>
<a href="/habitaciones">Habitaciones</a>
<a href="/reservas">Reservas</a>
<a href="/login">Iniciar sesión</a>
</nav>
</header>
<main>
{messages}{body}
</main>
<footer>&copy; {SITE_NAME}</footer>
</body>
</html>
"#,
        title = escape(title),
    ))
}

fn room_card(room: &Room) -> String {
    let image = room.images.first().copied().unwrap_or_default();
    format!(
        r#"<article class="room-card">
<img src="{image}" alt="{name}">
<h3>{name}</h3>
<p class="room-category">{category}</p>
<p>{description}</p>
<p class="room-price">{price} / noche</p>
<a class="btn" href="/habitaciones/{id}">Ver detalles</a>
</article>
"#,
        image = escape(image),
        name = escape(room.name),
        category = room.category.label(),
        description = escape(room.description),
        price = money(room.price),
        id = room.id,
    )
}

pub fn home(flashes: &[Flash]) -> Html<String> {
    let featured: String = catalog::all().iter().take(3).map(room_card).collect();
    let body = format!(
        r#"<section class="hero">
<h1>Bienvenido a {SITE_NAME}</h1>
<p>Descanso frente al mar, a su medida.</p>
<a class="btn" href="/reservas">Reservar ahora</a>
</section>
<section class="featured">
<h2>Habitaciones destacadas</h2>
{featured}</section>
"#
    );
    layout("Inicio", flashes, &body)
}

pub fn rooms(flashes: &[Flash]) -> Html<String> {
    let cards: String = catalog::all().iter().map(room_card).collect();
    let body = format!(
        r#"<h1>Nuestras habitaciones</h1>
<section class="room-list">
{cards}</section>
"#
    );
    layout("Habitaciones", flashes, &body)
}

pub fn room_detail(room: &Room, flashes: &[Flash]) -> Html<String> {
    let amenities: String = room
        .amenities
        .iter()
        .map(|amenity| format!("<li>{}</li>", escape(amenity)))
        .collect();
    let gallery: String = room
        .images
        .iter()
        .map(|image| format!(r#"<img src="{}" alt="{}">"#, escape(image), escape(room.name)))
        .collect();

    let body = format!(
        r#"<article class="room-detail" data-room-id="{id}">
<h1>{name}</h1>
<div class="gallery">{gallery}</div>
<p class="room-category">{category}</p>
<p>{description}</p>
<ul class="room-facts">
<li>Tamaño: {size}</li>
<li>Camas: {beds}</li>
<li>Capacidad: {capacity} personas</li>
</ul>
<h2>Servicios</h2>
<ul class="amenities">{amenities}</ul>
<p class="room-price">{price} / noche</p>
<a class="btn select-room" href="/habitaciones/{id}/reservar">Reservar esta habitación</a>
</article>
"#,
        id = room.id,
        name = escape(room.name),
        category = room.category.label(),
        description = escape(room.description),
        size = escape(room.size),
        beds = escape(room.beds),
        capacity = room.capacity,
        price = money(room.price),
    );
    layout(room.name, flashes, &body)
}

pub fn booking_form(selected: Option<&Room>, flashes: &[Flash]) -> Html<String> {
    let room_summary = match selected {
        Some(room) => format!(
            r#"<div class="selected-room">
<h2>Habitación seleccionada</h2>
<p>{name} <span class="room-price">{price}</span> / noche</p>
</div>
"#,
            name = escape(room.name),
            price = money(room.price),
        ),
        None => r#"<div class="selected-room">
<p>No ha seleccionado ninguna habitación. <a href="/habitaciones">Ver habitaciones</a></p>
</div>
"#
        .to_string(),
    };

    let body = format!(
        r#"<h1>Reservar</h1>
<div class="reservation-form-container">
{room_summary}<form method="post" action="/reservas/procesar">
<label for="check-in">Fecha de entrada</label>
<input type="date" id="check-in" name="check_in" required>
<label for="check-out">Fecha de salida</label>
<input type="date" id="check-out" name="check_out" required>
<label for="guests">Huéspedes</label>
<input type="number" id="guests" name="huespedes" min="1" value="1">
<label for="nombre">Nombre</label>
<input type="text" id="nombre" name="nombre" required>
<label for="apellido">Apellido</label>
<input type="text" id="apellido" name="apellido" required>
<label for="email">Email</label>
<input type="email" id="email" name="email" required>
<label for="telefono">Teléfono</label>
<input type="tel" id="telefono" name="telefono" required>
<label for="notas">Notas</label>
<textarea id="notas" name="notas"></textarea>
<button type="submit" class="btn submit-reservation">Confirmar reserva</button>
</form>
</div>
"#
    );
    layout("Reservas", flashes, &body)
}

pub fn confirmation(reservation: &Reservation, flashes: &[Flash]) -> Html<String> {
    let room_name = catalog::find(reservation.room_id)
        .map(|room| room.name)
        .unwrap_or("Habitación");
    let notes = reservation
        .notes
        .as_deref()
        .map(|notes| format!("<li>Notas: {}</li>\n", escape(notes)))
        .unwrap_or_default();

    let body = format!(
        r#"<h1>¡Reserva confirmada!</h1>
<section class="confirmation">
<p class="reference">Código de reserva: <strong>{reference}</strong></p>
<ul>
<li>Huésped: {first_name} {last_name}</li>
<li>Email: {email}</li>
<li>Teléfono: {phone}</li>
<li>Habitación: {room_name}</li>
<li>Entrada: {check_in}</li>
<li>Salida: {check_out}</li>
<li>Noches: <span class="nights-count">{nights}</span></li>
<li>Huéspedes: {guests}</li>
{notes}<li>Total: <span class="total-amount">{total}</span></li>
</ul>
<p class="created-at">Reserva creada el {created_at}</p>
</section>
"#,
        reference = escape(&reservation.reference),
        first_name = escape(&reservation.guest.first_name),
        last_name = escape(&reservation.guest.last_name),
        email = escape(&reservation.guest.email),
        phone = escape(&reservation.guest.phone),
        room_name = escape(room_name),
        check_in = reservation.stay.check_in.format("%d/%m/%Y"),
        check_out = reservation.stay.check_out.format("%d/%m/%Y"),
        nights = reservation.stay.nights,
        guests = reservation.stay.guests,
        total = money(reservation.total),
        created_at = reservation.created_at.format("%d/%m/%Y %H:%M UTC"),
    );
    layout("Confirmación", flashes, &body)
}

pub fn login(flashes: &[Flash]) -> Html<String> {
    let body = r#"<h1>Iniciar sesión</h1>
<form class="auth-form">
<label for="email">Email</label>
<input type="email" id="email" name="email">
<label for="password">Contraseña</label>
<input type="password" id="password" name="password">
<button type="button" class="btn" disabled>Próximamente</button>
</form>
<p><a href="/register">Crear una cuenta</a></p>
"#;
    layout("Iniciar sesión", flashes, body)
}

pub fn register(flashes: &[Flash]) -> Html<String> {
    let body = r#"<h1>Crear cuenta</h1>
<form class="auth-form">
<label for="nombre">Nombre</label>
<input type="text" id="nombre" name="nombre">
<label for="email">Email</label>
<input type="email" id="email" name="email">
<label for="password">Contraseña</label>
<input type="password" id="password" name="password">
<button type="button" class="btn" disabled>Próximamente</button>
</form>
<p><a href="/login">Ya tengo una cuenta</a></p>
"#;
    layout("Crear cuenta", flashes, body)
}

pub fn not_found() -> Html<String> {
    let body = r#"<section class="error-page">
<h1>404</h1>
<p>La página que busca no existe.</p>
<a class="btn" href="/">Volver al inicio</a>
</section>
"#;
    layout("Página no encontrada", &[], body)
}

pub fn server_error() -> Html<String> {
    let body = r#"<section class="error-page">
<h1>Error</h1>
<p>No pudimos procesar su solicitud. Por favor, intente nuevamente.</p>
</section>
"#;
    layout("Error", &[], body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FlashKind;

    #[test]
    fn when_text_has_markup_then_it_is_escaped() {
        assert_eq!(
            escape(r#"<b>"Ana" & 'Luis'</b>"#),
            "&lt;b&gt;&quot;Ana&quot; &amp; &#39;Luis&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn when_amount_is_formatted_then_two_decimals_are_shown() {
        assert_eq!(money(250.0), "$250.00");
        assert_eq!(money(1234.5), "$1234.50");
    }

    #[test]
    fn when_flashes_are_rendered_then_messages_are_escaped_with_kind_class() {
        let flashes = [Flash {
            kind: FlashKind::Error,
            message: "<script>".to_string(),
        }];

        let Html(page) = home(&flashes);

        assert!(page.contains(r#"<div class="flash flash-error">&lt;script&gt;</div>"#));
    }

    #[test]
    fn when_room_list_is_rendered_then_every_room_is_linked() {
        let Html(page) = rooms(&[]);

        for room in catalog::all() {
            assert!(page.contains(&format!("/habitaciones/{}", room.id)));
        }
    }
}
