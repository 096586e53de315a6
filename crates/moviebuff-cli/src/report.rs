//! Human-readable output of API responses.
//!
//! Everything is emitted through `tracing::info!` so output goes through the
//! same subscriber as diagnostics.

use moviebuff_api::{Calendar, Certification, Entity, MappedCpl, Movie, Person, Resources};

/// Prints movie details.
pub fn report_movie(movie: &Movie) {
    tracing::info!("Name: {}", movie.name);
    tracing::info!("UUID: {}", movie.uuid);
    tracing::info!("Film Type: {}", movie.film_type);
    tracing::info!("Language: {}", movie.language);
    tracing::info!("Genres: {}", movie.genres.join(", "));
    tracing::info!(
        "Earliest Release Year: {}",
        movie
            .earliest_release_year()
            .map_or_else(|| String::from("-"), |y| y.to_string())
    );
    tracing::info!("Running Time: {}s", movie.running_time);
    tracing::info!("Release Dates:");
    for (country, date) in &movie.release_dates {
        tracing::info!("  {}\t{}", country, date);
    }
    tracing::info!("Certifications:");
    for (country, code) in &movie.certifications {
        tracing::info!("  {}\t{}", country, code);
    }
    tracing::info!("Cast:");
    for member in &movie.cast {
        tracing::info!(
            "  {}\t{}\t{}",
            member.name,
            member.role,
            member.character.as_deref().unwrap_or("-"),
        );
    }
}

/// Prints person details and credits.
pub fn report_person(person: &Person) {
    tracing::info!("Name: {}", person.name);
    tracing::info!("UUID: {}", person.uuid);
    tracing::info!("Birthday: {}", person.birthday.as_deref().unwrap_or("-"));
    tracing::info!(
        "Birthplace: {}",
        person.birthplace.as_deref().unwrap_or("-")
    );
    tracing::info!("Credits:");
    for department in &person.credits {
        tracing::info!("  {} ({})", department.department, department.roles.len());
        for role in &department.roles {
            tracing::info!("    {}\t{}", role.name, role.role);
        }
    }
}

/// Prints entity details and credits.
pub fn report_entity(entity: &Entity) {
    tracing::info!("Name: {}", entity.name);
    tracing::info!("UUID: {}", entity.uuid);
    tracing::info!("Services: {}", entity.services.join(", "));
    tracing::info!("Credits:");
    for department in &entity.credits {
        tracing::info!("  {} ({})", department.department, department.roles.len());
        for role in &department.roles {
            tracing::info!("    {}\t{}", role.name, role.role);
        }
    }
}

/// Prints one page of a resource listing.
pub fn report_resources(page: &Resources) {
    tracing::info!("UUID\t\t\t\t\tType\tName");
    for resource in &page.data {
        tracing::info!("{}\t{}\t{}", resource.uuid, resource.r#type, resource.name);
    }
    tracing::info!("Prev: {}", page.prev.as_deref().unwrap_or("-"));
    tracing::info!("Next: {}", page.next.as_deref().unwrap_or("-"));
}

/// Prints certifications in server order.
pub fn report_certifications(certifications: &[Certification]) {
    tracing::info!("Code\tChildSafe\tCountry\tUUID");
    for certification in certifications {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            certification.code,
            certification.child_safe,
            certification.country.code,
            certification.uuid,
        );
    }
    tracing::info!("Total: {} certifications", certifications.len());
}

/// Prints a holiday calendar in server order.
pub fn report_calendar(calendar: &Calendar) {
    tracing::info!("Calendar: {} ({})", calendar.name, calendar.time_zone);
    for holiday in &calendar.holidays {
        tracing::info!("{}\t{}", holiday.date, holiday.name);
    }
    tracing::info!("Total: {} holidays", calendar.holidays.len());
}

/// Prints a CPL-to-movie mapping.
pub fn report_mapped_cpl(mapped: &MappedCpl) {
    tracing::info!("CPL: {}", mapped.content_title_text);
    tracing::info!("Movie: {} ({})", mapped.movie.name, mapped.movie.uuid);
    tracing::info!(
        "Part: {}",
        mapped.movie.part.as_ref().map_or("-", |part| part.name.as_str())
    );
}
