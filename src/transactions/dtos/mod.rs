pub mod verify_transaction_dto;
