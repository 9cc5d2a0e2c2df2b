//! Operation records around Ituiutaba, MG used across the test suites.

use crew_router::geometry::Coordinates;
use crew_router::records::{Lodging, Vehicle, WorkOrder, WorkSite};

pub fn lodging_7() -> Lodging {
    Lodging {
        id: 7,
        street: "Rua Vinte e Dois".to_string(),
        number: "1540".to_string(),
        neighborhood: "Centro".to_string(),
        city: "Ituiutaba".to_string(),
        postal_code: "38300-084".to_string(),
        residents: Some(12),
        active: Some(true),
    }
}

pub fn lodging_9() -> Lodging {
    Lodging {
        id: 9,
        street: "Rua Trinta e Oito".to_string(),
        number: "877".to_string(),
        neighborhood: "Platina".to_string(),
        city: "Ituiutaba".to_string(),
        postal_code: "38301-012".to_string(),
        residents: Some(8),
        active: Some(true),
    }
}

pub fn work_site_3() -> WorkSite {
    WorkSite {
        id: 3,
        code: "CT-03".to_string(),
        supervisor: "Marina Lopes".to_string(),
        street: "Avenida Nove".to_string(),
        number: "210".to_string(),
        neighborhood: "Alvorada".to_string(),
        city: "Ituiutaba".to_string(),
        postal_code: "38302-102".to_string(),
        complement: None,
        state: Some("MG".to_string()),
        status: Some("ativo".to_string()),
    }
}

pub fn work_order_12() -> WorkOrder {
    let site = work_site_3();
    WorkOrder {
        id: 12,
        created_at: "2025-05-02".to_string(),
        employee_name: "Carlos Souza".to_string(),
        employee_badge: "F-0042".to_string(),
        service_role: "Eletricista".to_string(),
        service_id: 3,
        work_site_id: site.id,
        work_site_code: site.code,
        work_site_supervisor: site.supervisor,
        work_site_street: site.street,
        work_site_number: site.number,
        work_site_neighborhood: site.neighborhood,
        work_site_city: site.city,
        work_site_postal_code: site.postal_code,
    }
}

pub fn vehicle_5() -> Vehicle {
    Vehicle {
        id: 5,
        fleet: "F-12".to_string(),
        vehicle_type: "Van".to_string(),
        plate: "PQX-2047".to_string(),
        capacity: 15,
    }
}

/// Address query → coordinates, as a stub geocoder would resolve them.
pub fn known_addresses() -> Vec<(String, Coordinates)> {
    vec![
        (lodging_7().address().query(), Coordinates::new(-49.46, -18.97)),
        (lodging_9().address().query(), Coordinates::new(-49.44, -18.95)),
        (work_site_3().address().query(), Coordinates::new(-49.40, -18.90)),
    ]
}
